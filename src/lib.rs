//! Recall - Audio-Visual Memory Trainer Core
//!
//! Deterministic round generation and scoring for a corridor-based memory
//! exercise: rounds restrict two corridors, announce a mix of target and
//! distractor cities, and grade the player's recall. Rendering, audio
//! playback, timers, and leaderboard storage are external collaborators that
//! call in synchronously between their own phases.

pub mod catalog;
pub mod constants;
pub mod difficulty;
pub mod exam;
pub mod leaderboard;
pub mod round;
pub mod scoring;
pub mod session;
pub mod shuffle;

pub use catalog::{Corridor, ALL_CORRIDORS, CITIES, CORRIDOR_COUNT};
pub use difficulty::{
    exam_stage, resolve, ConfigError, Difficulty, ExamStage, RoundConfig, RoundShape, EXAM_PLAN,
    EXAM_STAGE_COUNT,
};
pub use exam::{ExamProgress, ExamState, ScoreTotals};
pub use leaderboard::Submission;
pub use round::{generate, InsufficientCities, RoundData};
pub use scoring::{score, RoundResult};
pub use session::{Phase, Session, SessionError, SessionEvent, SessionMode};
