#![no_std]

//! Rules engine for a grid mine-sweeping game: generation, cascading reveal,
//! flag bookkeeping and win/loss detection, driven through [`GameSession`].

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use detector::*;
pub use error::*;
pub use flag::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod config;
mod detector;
mod error;
mod flag;
mod generator;
mod reveal;
mod session;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}
