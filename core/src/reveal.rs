use alloc::vec::Vec;

use crate::*;

/// What a single reveal did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealResult {
    /// Out of bounds, already revealed or flagged.
    NoChange,
    /// Safe cells opened, `count` includes every cell the cascade reached.
    Revealed { count: CellCount },
    /// The target was a mine, it is now revealed and counted.
    MineHit,
}

impl RevealResult {
    pub const fn newly_revealed(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Revealed { count } => count,
            Self::MineHit => 1,
        }
    }
}

impl Board {
    /// Reveals `pos`, flood-filling outward from zero-adjacency cells.
    ///
    /// Terminal-state checks are the session's job, this only applies cell rules.
    pub fn reveal(&mut self, pos: Coord2) -> RevealResult {
        let Some(pos) = self.validate_coords(pos) else {
            return RevealResult::NoChange;
        };

        let cell = self[pos];
        if !cell.is_hidden() {
            return RevealResult::NoChange;
        }

        if cell.is_mine() {
            self.mark_revealed(pos);
            log::debug!("Revealed mine at {:?}", pos);
            return RevealResult::MineHit;
        }

        let mut count: CellCount = 0;
        let mut frontier = Vec::from([pos]);

        // the hidden check doubles as the visited guard: each cell opens at most once
        while let Some(visit) = frontier.pop() {
            if !self[visit].is_hidden() {
                continue;
            }

            self.mark_revealed(visit);
            count += 1;
            log::trace!(
                "Opened cell at {:?}, adjacent mines: {}",
                visit,
                self[visit].adjacent_mines()
            );

            if self[visit].adjacent_mines() == 0 {
                frontier.extend(
                    self.iter_neighbors(visit)
                        .filter(|&neighbor| self[neighbor].is_hidden()),
                );
            }
        }

        log::debug!("Revealed {} cells from {:?}", count, pos);
        RevealResult::Revealed { count }
    }

    /// Exposes every mine still hidden, without touching the revealed counter.
    ///
    /// Flags on mines are cleared so the revealed-never-flagged rule holds; wrong flags stay.
    pub fn reveal_all_mines(&mut self) -> CellCount {
        let mut exposed: CellCount = 0;
        let mut cleared_flags: CellCount = 0;

        for cell in self.cells_mut() {
            if cell.is_mine() && !cell.is_revealed() {
                if cell.is_flagged() {
                    cell.set_flagged(false);
                    cleared_flags += 1;
                }
                cell.set_revealed();
                exposed += 1;
            }
        }

        self.flagged_count -= cleared_flags;
        log::debug!("Exposed {} mines", exposed);
        exposed
    }

    fn mark_revealed(&mut self, pos: Coord2) {
        self.cell_mut(pos).set_revealed();
        self.revealed_count += 1;
    }
}
