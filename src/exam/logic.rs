//! Exam round recording and derived figures.

use super::types::ExamProgress;
use crate::difficulty::{exam_stage, ExamStage};
use crate::scoring::RoundResult;

/// The stage the attempt is currently on, `None` once complete.
pub fn current_stage(progress: &ExamProgress) -> Option<ExamStage> {
    if progress.is_complete() {
        return None;
    }
    exam_stage(progress.current_stage).ok()
}

/// Fold one round's outcome into the attempt and advance to the next stage.
/// Recording onto a complete attempt is a no-op.
pub fn record_round(progress: &mut ExamProgress, result: &RoundResult) {
    if progress.is_complete() {
        return;
    }
    progress.totals.correct += result.correct.len();
    progress.totals.missed += result.missed.len();
    progress.totals.incorrect += result.incorrect.len();
    progress.flawless_history.push(result.is_flawless());
    progress.current_stage += 1;
}

/// Share of expected cities actually recalled across the attempt so far, in
/// `0.0..=1.0`. Zero before anything was expected.
pub fn recall_percentage(progress: &ExamProgress) -> f64 {
    let expected = progress.totals.correct + progress.totals.missed;
    if expected == 0 {
        return 0.0;
    }
    progress.totals.correct as f64 / expected as f64
}
