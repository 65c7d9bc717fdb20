//! Recall scoring.
//!
//! Grades a player's selection against the generated round: expected cities
//! become correct or missed, everything else selected is incorrect. Pure
//! call-and-return; identical inputs always grade identically.

use crate::catalog::Corridor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-city outcome of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Expected cities the player selected.
    pub correct: Vec<String>,
    /// Expected cities the player failed to select.
    pub missed: Vec<String>,
    /// Selected cities that were not expected, including restricted-corridor
    /// distractors the player fell for.
    pub incorrect: Vec<String>,
}

impl RoundResult {
    /// A flawless round has nothing missed and nothing incorrect.
    pub fn is_flawless(&self) -> bool {
        self.missed.is_empty() && self.incorrect.is_empty()
    }

    /// Number of cities the round expected the player to recall.
    pub fn expected_total(&self) -> usize {
        self.correct.len() + self.missed.len()
    }
}

/// Partition `answers` against the round's assignment.
///
/// Targets are re-filtered against `restricted_corridors` rather than trusted:
/// generation never puts a target on a restricted corridor, but a target that
/// arrives on one anyway is dropped from the recall expectation (and logged)
/// instead of being graded. A target missing from the mapping stays
/// recallable.
///
/// Output lists keep the iteration order of their source: `correct`/`missed`
/// follow `target_cities`, `incorrect` follows `answers`.
pub fn score(
    mapping: &HashMap<String, Corridor>,
    target_cities: &[String],
    restricted_corridors: &[Corridor],
    answers: &[String],
) -> RoundResult {
    let cities_to_memorize: Vec<&String> = target_cities
        .iter()
        .filter(|city| match mapping.get(*city) {
            Some(corridor) if restricted_corridors.contains(corridor) => {
                log::warn!(
                    "target city {city} sits on restricted corridor {corridor}; dropped from recall set"
                );
                false
            }
            _ => true,
        })
        .collect();

    let mut result = RoundResult::default();
    for city in &cities_to_memorize {
        if answers.contains(*city) {
            result.correct.push((*city).clone());
        } else {
            result.missed.push((*city).clone());
        }
    }
    for answer in answers {
        if !cities_to_memorize.iter().any(|city| *city == answer) {
            result.incorrect.push(answer.clone());
        }
    }
    result
}
