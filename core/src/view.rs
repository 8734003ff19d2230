use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs after an operation, with unrevealed mines hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub size: Coord2,
    pub total_mines: CellCount,
    pub remaining_mines: i32,
    pub status: GameStatus,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<CellView>,
}

impl SessionView {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        let mut cells = Array2::from_elem(board.size().to_nd_index(), CellView::Hidden);
        for (pos, cell) in board.iter_cells() {
            cells[pos.to_nd_index()] = cell.view();
        }

        Self {
            size: board.size(),
            total_mines: board.mine_count(),
            remaining_mines: session.remaining_mines(),
            status: session.status(),
            triggered_mine: session.triggered_mine(),
            cells,
        }
    }

    pub fn cell_at(&self, pos: Coord2) -> Option<CellView> {
        self.cells.get(pos.to_nd_index()).copied()
    }
}

impl GameSession {
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}
