use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform placement: every mine lands on a distinct cell drawn uniformly at random.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        config.validate()?;

        let (rows, cols) = config.size;
        let cols = usize::from(cols);
        let total_cells = usize::from(config.total_cells());
        log::debug!(
            "Generating {}x{} board with {} mines, seed {}",
            rows,
            cols,
            config.mines,
            self.seed
        );

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut collisions = 0usize;

        // validation leaves at least one safe cell, so this terminates
        while mines_placed < config.mines {
            let index = rng.random_range(0..total_cells);
            let cell = &mut mine_mask[[index / cols, index % cols]];
            if *cell {
                collisions += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }
        log::trace!("Placed {} mines, {} collisions resampled", mines_placed, collisions);

        Board::from_mine_mask(config.size, &mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(board: &Board, pos: Coord2) -> u8 {
        let (rows, cols) = board.size();
        let mut count = 0;
        for row in pos.0.saturating_sub(1)..=pos.0.saturating_add(1) {
            for col in pos.1.saturating_sub(1)..=pos.1.saturating_add(1) {
                if (row, col) == pos || row >= rows || col >= cols {
                    continue;
                }
                if board[(row, col)].is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn places_exact_mine_count_with_correct_adjacency() {
        for difficulty in Difficulty::ALL {
            for seed in 0..20 {
                let config = difficulty.config();
                let board = RandomMinefieldGenerator::new(seed).generate(config).unwrap();

                let mines = board.iter_cells().filter(|(_, cell)| cell.is_mine()).count();
                assert_eq!(mines, usize::from(config.mines));
                assert_eq!(board.mine_count(), config.mines);

                for (pos, cell) in board.iter_cells() {
                    if !cell.is_mine() {
                        assert_eq!(cell.adjacent_mines(), brute_force_count(&board, pos));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = Difficulty::Medium.config();

        let a = RandomMinefieldGenerator::new(7).generate(config).unwrap();
        let b = RandomMinefieldGenerator::new(7).generate(config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn nearly_full_board_still_places_every_mine() {
        let config = GameConfig::new((3, 3), 8).unwrap();
        let board = RandomMinefieldGenerator::new(3).generate(config).unwrap();

        let safe: alloc::vec::Vec<_> = board
            .iter_cells()
            .filter(|(_, cell)| !cell.is_mine())
            .collect();
        assert_eq!(safe.len(), 1);
    }

    #[test]
    fn zero_mines_is_allowed() {
        let config = GameConfig::new((1, 1), 0).unwrap();
        let board = RandomMinefieldGenerator::new(0).generate(config).unwrap();

        assert_eq!(board[(0, 0)], Cell::new(false, 0));
    }

    #[test]
    fn rejects_invalid_configuration_before_generating() {
        let config = GameConfig::new_unchecked((2, 2), 4);

        assert_eq!(
            RandomMinefieldGenerator::new(0).generate(config),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 4,
                cells: 4
            }))
        );
        assert!(
            RandomMinefieldGenerator::new(0)
                .generate(GameConfig::new_unchecked((0, 3), 0))
                .is_err()
        );
    }
}
