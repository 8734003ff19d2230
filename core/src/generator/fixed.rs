use alloc::vec::Vec;

use super::*;

/// Places mines exactly where told, for reproducible layouts and replays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let board = Board::from_mine_coords(config.size, &self.mines)?;
        if board.mine_count() != config.mines {
            return Err(ConfigIssue::MineCountMismatch {
                expected: config.mines,
                placed: board.mine_count(),
            }
            .into());
        }

        log::debug!("Placed {} fixed mines", board.mine_count());
        Ok(board)
    }
}
