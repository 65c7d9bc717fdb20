//! Round construction: restricted corridors, city assignment, and the
//! announcement sequence for one round.

pub mod generation;
pub mod spacing;
pub mod types;

pub use generation::*;
pub use spacing::*;
pub use types::*;
