use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
}

/// What exactly was wrong with a requested game configuration.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: Coord, cols: Coord },
    #[error("{mines} mines leave no safe cell on a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("mine at {pos:?} lies outside the board")]
    MineOutOfBounds { pos: Coord2 },
    #[error("layout places {placed} distinct mines but {expected} were requested")]
    MineCountMismatch {
        expected: CellCount,
        placed: CellCount,
    },
    #[error("unknown difficulty preset")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
