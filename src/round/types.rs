//! Round data structures.

use crate::catalog::Corridor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything one round's generation produces. Built once by `generate`,
/// then read-only: the presentation layer plays `announced_cities` in order
/// and the scorer grades answers against the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundData {
    /// The two corridors flagged forbidden for this round.
    pub restricted_corridors: [Corridor; 2],
    /// Cities the player is expected to recall at answer time.
    pub target_cities: Vec<String>,
    /// Full announcement sequence, targets and distractors, in playback order.
    pub announced_cities: Vec<String>,
    /// Corridor assignment for every announced city.
    pub mapping: HashMap<String, Corridor>,
    /// True when the announcement ordering fell back past the spacing rules.
    pub spacing_degraded: bool,
}

impl RoundData {
    /// Corridor a city was announced for, if it was part of this round.
    pub fn corridor_of(&self, city: &str) -> Option<Corridor> {
        self.mapping.get(city).copied()
    }

    /// Announced cities sitting on a restricted corridor: the distractors the
    /// player must not select.
    pub fn distractor_cities(&self) -> Vec<&str> {
        self.announced_cities
            .iter()
            .filter(|city| {
                self.mapping
                    .get(*city)
                    .is_some_and(|corridor| self.restricted_corridors.contains(corridor))
            })
            .map(String::as_str)
            .collect()
    }
}
