//! Exam progression: the fixed multi-stage assessment and its running tally.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
