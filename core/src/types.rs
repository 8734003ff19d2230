/// Single coordinate axis, used for row/column indices and board dimensions.
pub type Coord = u8;

/// Count type used for mine counts, cell counts and the board counters.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the in-bounds Moore neighbourhood of a cell, row by row, skipping the cell itself.
///
/// Edge and corner cells simply yield fewer positions (5 and 3 respectively).
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    row: Coord,
    col: Coord,
    row_end: Coord,
    col_start: Coord,
    col_end: Coord,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let (row, col) = center;
        let (rows, cols) = size;

        let row_start = row.saturating_sub(1);
        let col_start = col.saturating_sub(1);
        // exclusive bounds, clamped to the grid
        let row_end = row.saturating_add(2).min(rows);
        let col_end = col.saturating_add(2).min(cols);

        Self {
            center,
            row: row_start,
            col: col_start,
            row_end,
            col_start,
            col_end,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.row_end {
            if self.col >= self.col_end {
                self.row += 1;
                self.col = self.col_start;
                continue;
            }

            let pos = (self.row, self.col);
            self.col += 1;

            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_and_edge_cells_are_clipped() {
        let corner: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(corner, [(0, 1), (1, 0), (1, 1)]);

        let edge: Vec<_> = NeighborIter::new((2, 1), (3, 3)).collect();
        assert_eq!(edge, [(1, 0), (1, 1), (1, 2), (2, 0), (2, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn max_coordinate_does_not_overflow() {
        let size = (Coord::MAX, Coord::MAX);
        let last = (Coord::MAX - 1, Coord::MAX - 1);

        assert_eq!(NeighborIter::new(last, size).count(), 3);
    }
}
