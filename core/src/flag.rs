use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagToggle {
    NoChange,
    Flagged,
    Unflagged,
}

impl Board {
    /// Flips the flag on an unrevealed cell; revealed or out-of-bounds cells are left alone.
    ///
    /// There is no cap at the mine count, over-flagging just drives the remaining count negative.
    pub fn toggle_flag(&mut self, pos: Coord2) -> FlagToggle {
        let Some(pos) = self.validate_coords(pos) else {
            return FlagToggle::NoChange;
        };

        let cell = self.cell_mut(pos);
        if cell.is_revealed() {
            return FlagToggle::NoChange;
        }

        if cell.is_flagged() {
            cell.set_flagged(false);
            self.flagged_count -= 1;
            log::debug!("Unflagged {:?}", pos);
            FlagToggle::Unflagged
        } else {
            cell.set_flagged(true);
            self.flagged_count += 1;
            log::debug!("Flagged {:?}", pos);
            FlagToggle::Flagged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_then_unflag_restores_count() {
        let mut board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(board.toggle_flag((0, 0)), FlagToggle::Flagged);
        assert_eq!(board.flagged_count(), 1);
        assert!(board[(0, 0)].is_flagged());

        assert_eq!(board.toggle_flag((0, 0)), FlagToggle::Unflagged);
        assert_eq!(board.flagged_count(), 0);
        assert!(!board[(0, 0)].is_flagged());
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        board.reveal((0, 0));

        assert_eq!(board.toggle_flag((0, 0)), FlagToggle::NoChange);
        assert_eq!(board.flagged_count(), 0);
    }

    #[test]
    fn out_of_bounds_is_no_change() {
        let mut board = Board::from_mine_coords((1, 2), &[]).unwrap();

        assert_eq!(board.toggle_flag((1, 0)), FlagToggle::NoChange);
        assert_eq!(board.flagged_count(), 0);
    }

    #[test]
    fn over_flagging_is_allowed() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            board.toggle_flag(pos);
        }

        assert_eq!(board.flagged_count(), 4);
        assert!(board.flagged_count() > board.mine_count());
    }
}
