use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ready,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Terminal notification for the presentation layer, queued once per game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Won,
    Lost,
}

/// One game from generation to a terminal state; the only entry point a UI calls.
///
/// Only `Serialize`: a session is always dealt by [`GameSession::start`] or
/// [`GameSession::start_with`], never rebuilt from outside data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
    pending_event: Option<GameEvent>,
}

impl GameSession {
    /// Starts a game on a randomly generated board.
    pub fn start(config: impl Into<GameConfig>) -> Result<Self> {
        Self::start_with(config, RandomMinefieldGenerator::from_entropy())
    }

    pub fn start_with(
        config: impl Into<GameConfig>,
        generator: impl MinefieldGenerator,
    ) -> Result<Self> {
        let config = config.into();
        let board = generator.generate(config)?;
        log::debug!(
            "Started {}x{} game with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        Self {
            config: board.config(),
            board,
            status: GameStatus::Ready,
            triggered_mine: None,
            pending_event: None,
        }
    }

    /// Discards the current board and deals a new one with the same configuration.
    pub fn restart(&mut self) -> Result<()> {
        *self = Self::start(self.config)?;
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// May go negative when more cells are flagged than there are mines.
    pub fn remaining_mines(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.board.flagged_count())
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_view(&self, pos: Coord2) -> Option<CellView> {
        self.board.cell(pos).map(Cell::view)
    }

    /// Drains the terminal notification, `Some` at most once per game.
    pub fn take_event(&mut self) -> Option<GameEvent> {
        self.pending_event.take()
    }

    pub fn reveal(&mut self, pos: Coord2) -> RevealOutcome {
        if self.status.is_finished() {
            return RevealOutcome::NoChange;
        }

        let result = self.board.reveal(pos);
        if result == RevealResult::NoChange {
            return RevealOutcome::NoChange;
        }

        if result == RevealResult::MineHit {
            self.triggered_mine = Some(pos);
        }

        match self.settle(Some(result)) {
            Verdict::Lost => RevealOutcome::HitMine,
            Verdict::Won => RevealOutcome::Won,
            Verdict::Undecided => RevealOutcome::Revealed,
        }
    }

    pub fn toggle_flag(&mut self, pos: Coord2) -> MarkOutcome {
        if self.status.is_finished() {
            return MarkOutcome::NoChange;
        }

        if self.board.toggle_flag(pos) == FlagToggle::NoChange {
            return MarkOutcome::NoChange;
        }

        match self.settle(None) {
            Verdict::Won => MarkOutcome::Won,
            _ => MarkOutcome::Changed,
        }
    }

    /// Runs the detector after an accepted operation and applies the transition.
    fn settle(&mut self, last_reveal: Option<RevealResult>) -> Verdict {
        let verdict = evaluate(&self.board, last_reveal);
        match verdict {
            Verdict::Undecided => self.mark_started(),
            Verdict::Won => self.end_game(true),
            Verdict::Lost => self.end_game(false),
        }
        verdict
    }

    fn mark_started(&mut self) {
        if self.status.is_ready() {
            self.status = GameStatus::Playing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.status.is_finished() {
            return;
        }

        if won {
            self.status = GameStatus::Won;
            self.pending_event = Some(GameEvent::Won);
        } else {
            self.status = GameStatus::Lost;
            self.pending_event = Some(GameEvent::Lost);
            self.board.reveal_all_mines();
        }
        log::debug!("Game ended: {:?}", self.status);
    }
}
