use serde::{Deserialize, Serialize};

/// One grid position, owned by its [`Board`](crate::Board).
///
/// `adjacent_mines` is stored for mines too, but only means something for safe cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(is_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            is_mine,
            is_revealed: false,
            is_flagged: false,
            adjacent_mines,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// Neither revealed nor flagged, the only state a reveal acts on.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub(crate) fn set_revealed(&mut self) {
        debug_assert!(!self.is_flagged, "flagged cells are never revealed");
        self.is_revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        debug_assert!(!self.is_revealed, "revealed cells are never flagged");
        self.is_flagged = flagged;
    }

    /// What a player is allowed to see of this cell.
    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_flagged, self.is_mine) {
            (true, _, true) => CellView::Mine,
            (true, _, false) => CellView::Revealed(self.adjacent_mines),
            (false, true, _) => CellView::Flagged,
            (false, false, _) => CellView::Hidden,
        }
    }
}

/// Player-visible state of a cell, mines stay hidden until revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_hides_unrevealed_mines() {
        let mut mine = Cell::new(true, 2);
        assert_eq!(mine.view(), CellView::Hidden);

        mine.set_flagged(true);
        assert_eq!(mine.view(), CellView::Flagged);

        mine.set_flagged(false);
        mine.set_revealed();
        assert_eq!(mine.view(), CellView::Mine);
    }

    #[test]
    fn revealed_safe_cell_shows_count() {
        let mut cell = Cell::new(false, 3);
        cell.set_revealed();

        assert_eq!(cell.view(), CellView::Revealed(3));
        assert!(!cell.view().is_unrevealed());
        assert!(!cell.is_hidden());
    }
}
