use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Produces a freshly populated board for a configuration.
///
/// Implementations must reject invalid configurations before building anything.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}
