//! Difficulty tiers and round configuration tables.
//!
//! Resolution is a pure lookup with no randomness: `(difficulty, round)` maps
//! to the structural parameters of one round, and the exam plan indexes the
//! same tables by stage position.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Difficulty tiers, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Rounds played in one practice session of this tier.
    pub fn max_rounds(&self) -> u32 {
        match self {
            Self::Easy | Self::Medium => 6,
            Self::Hard => 9,
        }
    }

    /// Seconds the answer phase stays open. Read by the external timer
    /// collaborator; the core never runs the countdown itself.
    pub fn answer_time_limit_secs(&self) -> u32 {
        match self {
            Self::Easy => 8,
            Self::Medium => 15,
            Self::Hard => 25,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How target cities are laid out over corridors in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundShape {
    /// One city per target corridor.
    Single { target_count: usize },
    /// The first `double_corridor_count` chosen corridors carry two cities
    /// each, the rest one. Invariant:
    /// `total_cities == target_corridor_count + double_corridor_count`.
    Doubled {
        total_cities: usize,
        target_corridor_count: usize,
        double_corridor_count: usize,
    },
}

/// Structural parameters of one round. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub shape: RoundShape,
    /// Distractor cities announced on the two restricted corridors.
    pub restricted_count: usize,
}

impl RoundConfig {
    /// Cities the player is expected to recall.
    pub fn target_total(&self) -> usize {
        match self.shape {
            RoundShape::Single { target_count } => target_count,
            RoundShape::Doubled { total_cities, .. } => total_cities,
        }
    }

    /// Every city announced in the round: targets plus distractors. All of
    /// them are distinct, so this is also the unique-city demand on the
    /// catalog.
    pub fn announced_total(&self) -> usize {
        self.target_total() + self.restricted_count
    }
}

const fn single(target_count: usize, restricted_count: usize) -> RoundConfig {
    RoundConfig {
        shape: RoundShape::Single { target_count },
        restricted_count,
    }
}

const fn doubled(
    total_cities: usize,
    target_corridor_count: usize,
    double_corridor_count: usize,
    restricted_count: usize,
) -> RoundConfig {
    RoundConfig {
        shape: RoundShape::Doubled {
            total_cities,
            target_corridor_count,
            double_corridor_count,
        },
        restricted_count,
    }
}

/// Configuration lookup failures. Deterministic, so never retried; always
/// surfaced to the caller rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no round configuration for {difficulty} round {round}")]
    UnknownRound { difficulty: Difficulty, round: u32 },
    #[error("exam stage {index} is out of range (the exam has {total} stages)")]
    UnknownExamStage { index: usize, total: usize },
}

/// Resolve the configuration for a practice round (1-based).
pub fn resolve(difficulty: Difficulty, round: u32) -> Result<RoundConfig, ConfigError> {
    let config = match (difficulty, round) {
        (Difficulty::Easy, 1..=3) => single(2, 1),
        (Difficulty::Easy, 4..=6) => single(3, 1),
        (Difficulty::Medium, 1..=3) => single(4, 2),
        (Difficulty::Medium, 4..=6) => single(5, 2),
        (Difficulty::Hard, 1..=3) => doubled(6, 5, 1, 3),
        (Difficulty::Hard, 4..=6) => doubled(7, 5, 2, 3),
        (Difficulty::Hard, 7..=9) => doubled(8, 6, 2, 3),
        _ => return Err(ConfigError::UnknownRound { difficulty, round }),
    };
    Ok(config)
}

/// Number of rounds in one exam attempt.
pub const EXAM_STAGE_COUNT: usize = 12;

/// The fixed exam schedule, ascending in difficulty. Each entry names the
/// practice profile the stage reuses.
pub const EXAM_PLAN: [(Difficulty, u32); EXAM_STAGE_COUNT] = [
    (Difficulty::Easy, 1),
    (Difficulty::Easy, 2),
    (Difficulty::Easy, 4),
    (Difficulty::Easy, 5),
    (Difficulty::Medium, 1),
    (Difficulty::Medium, 2),
    (Difficulty::Medium, 4),
    (Difficulty::Medium, 5),
    (Difficulty::Hard, 1),
    (Difficulty::Hard, 2),
    (Difficulty::Hard, 4),
    (Difficulty::Hard, 5),
];

/// One position in the exam schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamStage {
    pub difficulty: Difficulty,
    pub round: u32,
    pub config: RoundConfig,
}

/// Resolve an exam stage by its 0-based position in the schedule.
pub fn exam_stage(index: usize) -> Result<ExamStage, ConfigError> {
    let (difficulty, round) = *EXAM_PLAN
        .get(index)
        .ok_or(ConfigError::UnknownExamStage {
            index,
            total: EXAM_STAGE_COUNT,
        })?;
    Ok(ExamStage {
        difficulty,
        round,
        config: resolve(difficulty, round)?,
    })
}
