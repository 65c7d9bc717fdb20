//! Leaderboard submission payloads.
//!
//! Storage and ranking live with an external collaborator; this module only
//! shapes the opaque document it receives. Display names are validated before
//! they get here.

use crate::difficulty::EXAM_STAGE_COUNT;
use crate::exam::ExamProgress;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One finished exam attempt, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    /// Flawless rounds out of `total_rounds`.
    pub score: usize,
    pub total_rounds: usize,
    /// Submission day, `YYYY-MM-DD`.
    pub date: String,
}

impl Submission {
    /// Build a payload from a completed exam. `None` while the attempt is
    /// still in progress.
    pub fn from_exam(
        name: &str,
        progress: &ExamProgress,
        submitted_at: DateTime<Utc>,
    ) -> Option<Self> {
        if !progress.is_complete() {
            return None;
        }
        Some(Submission {
            name: name.to_string(),
            score: progress.flawless_count(),
            total_rounds: EXAM_STAGE_COUNT,
            date: submitted_at.format("%Y-%m-%d").to_string(),
        })
    }

    /// The JSON document handed to the leaderboard collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
