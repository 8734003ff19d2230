use crate::*;

/// Terminal verdict derived from the board counters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Undecided,
    Won,
    Lost,
}

impl Board {
    /// Every safe cell revealed and exactly as many flags as mines.
    ///
    /// Only flag *counts* are compared, flag placement is never checked against the mines.
    pub fn win_condition_met(&self) -> bool {
        self.revealed_count() == self.safe_cell_count()
            && self.flagged_count() == self.mine_count()
    }
}

/// Evaluates the board after a mutating operation.
///
/// A loss is never re-derived from the board: it is signalled by the reveal that hit the mine.
pub fn evaluate(board: &Board, last_reveal: Option<RevealResult>) -> Verdict {
    if matches!(last_reveal, Some(RevealResult::MineHit)) {
        Verdict::Lost
    } else if board.win_condition_met() {
        Verdict::Won
    } else {
        Verdict::Undecided
    }
}
