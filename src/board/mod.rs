// board module
mod board;
// error module
mod error;
// round module
mod round;
// score module
mod score;
// walk module
mod walk;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports for assembling and playing a round.
//─────────────────────────────────────────────────────────────────────────────
pub use board::{Board, Cell};
pub use error::RoundError;
pub use round::{generate_round, generate_round_with, Round, RoundLimits};
pub use score::{PointsBreakdown, Scorecard, SpareRemoval, MAX_SPARE_REMOVALS};
pub use walk::Walk;
