//! Exam progression state.

use crate::difficulty::EXAM_STAGE_COUNT;
use serde::{Deserialize, Serialize};

/// Raw per-city totals accumulated across an exam attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTotals {
    pub correct: usize,
    pub missed: usize,
    pub incorrect: usize,
}

/// Where an exam attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamState {
    /// Playing the stage at this 0-based schedule position.
    InProgress { stage: usize },
    Complete,
}

/// Accumulated outcome of one exam attempt.
///
/// Lives for the duration of the attempt; leaving the exam discards it and a
/// retake starts from `ExamProgress::new()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamProgress {
    /// 0-based index of the next stage to play.
    pub current_stage: usize,
    pub totals: ScoreTotals,
    /// Per-round flawless flags, in play order.
    pub flawless_history: Vec<bool>,
}

impl ExamProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ExamState {
        if self.current_stage >= EXAM_STAGE_COUNT {
            ExamState::Complete
        } else {
            ExamState::InProgress {
                stage: self.current_stage,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state(), ExamState::Complete)
    }

    /// Final score: flawless rounds out of `EXAM_STAGE_COUNT`. This figure,
    /// not the raw totals, is what leaves the core for any leaderboard.
    pub fn flawless_count(&self) -> usize {
        self.flawless_history.iter().filter(|flag| **flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attempt_starts_at_stage_zero() {
        let progress = ExamProgress::new();
        assert_eq!(progress.state(), ExamState::InProgress { stage: 0 });
        assert!(!progress.is_complete());
        assert_eq!(progress.flawless_count(), 0);
        assert_eq!(progress.totals, ScoreTotals::default());
        assert!(progress.flawless_history.is_empty());
    }

    #[test]
    fn test_complete_past_last_stage() {
        let progress = ExamProgress {
            current_stage: EXAM_STAGE_COUNT,
            ..ExamProgress::new()
        };
        assert_eq!(progress.state(), ExamState::Complete);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_flawless_count_counts_true_entries() {
        let progress = ExamProgress {
            flawless_history: vec![true, false, true, true],
            ..ExamProgress::new()
        };
        assert_eq!(progress.flawless_count(), 3);
    }
}
