use core::num::Saturating;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// The grid of cells plus the counters the rules are evaluated against.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    pub(crate) revealed_count: Saturating<CellCount>,
    pub(crate) flagged_count: Saturating<CellCount>,
}

impl Board {
    /// Builds a board from a mine mask shaped `size`, computing adjacency for every cell.
    pub(crate) fn from_mine_mask(size: Coord2, mine_mask: &Array2<bool>) -> Result<Self> {
        debug_assert_eq!(mine_mask.dim(), (usize::from(size.0), usize::from(size.1)));

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        // mask dimensions are bounded by Coord, so the count fits
        let mine_count = CellCount::try_from(mine_count).unwrap_or(CellCount::MAX);
        GameConfig::new(size, mine_count)?;

        let cells = Array2::from_shape_fn(mine_mask.raw_dim(), |(row, col)| {
            let pos = (row as Coord, col as Coord);
            let adjacent_mines = NeighborIter::new(pos, size)
                .filter(|&neighbor| mine_mask[neighbor.to_nd_index()])
                .count() as u8;
            Cell::new(mine_mask[[row, col]], adjacent_mines)
        });

        Ok(Self {
            cells,
            mine_count,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
        })
    }

    /// Builds a board with mines at fixed positions.
    ///
    /// Duplicates collapse into one mine, a position outside the grid is an error.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(ConfigIssue::EmptyBoard { rows, cols }.into());
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &pos in mine_coords {
            let Some(mine) = mine_mask.get_mut(pos.to_nd_index()) else {
                return Err(ConfigIssue::MineOutOfBounds { pos }.into());
            };
            *mine = true;
        }

        Self::from_mine_mask(size, &mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // constructed from a Coord2, never wider
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// `None` when `pos` lies outside the grid.
    pub fn validate_coords(&self, pos: Coord2) -> Option<Coord2> {
        let (rows, cols) = self.size();
        (pos.0 < rows && pos.1 < cols).then_some(pos)
    }

    pub fn cell(&self, pos: Coord2) -> Option<&Cell> {
        self.cells.get(pos.to_nd_index())
    }

    pub fn iter_neighbors(&self, pos: Coord2) -> NeighborIter {
        NeighborIter::new(pos, self.size())
    }

    /// All cells with their positions, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub(crate) fn cell_mut(&mut self, pos: Coord2) -> &mut Cell {
        &mut self.cells[pos.to_nd_index()]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

/// Panics on out-of-bounds positions, use [`Board::cell`] for unchecked input.
impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
