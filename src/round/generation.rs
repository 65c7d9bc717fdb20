//! Round generation.
//!
//! Builds one round from its resolved configuration: picks the restricted
//! corridors, assigns cities under the round's shape, adds restricted-corridor
//! distractors, and orders the announcement sequence.

use super::spacing;
use super::types::RoundData;
use crate::catalog::{Corridor, ALL_CORRIDORS, CITIES};
use crate::constants::RESTRICTED_CORRIDORS_PER_ROUND;
use crate::difficulty::{RoundConfig, RoundShape};
use crate::shuffle;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A configuration demanded more distinct cities than the catalog holds.
/// Indicates a configuration bug; never produced by the shipped tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("round requires {required} unique cities but the catalog holds {available}")]
pub struct InsufficientCities {
    pub required: usize,
    pub available: usize,
}

/// Generate one round from its configuration.
///
/// All randomness flows through the caller's `rng`, so a seeded generator
/// reproduces the round exactly. The working city set and mapping are owned by
/// this call alone; independent rounds may generate in parallel.
pub fn generate(config: &RoundConfig, rng: &mut impl Rng) -> Result<RoundData, InsufficientCities> {
    let required = config.announced_total();
    if required > CITIES.len() {
        return Err(InsufficientCities {
            required,
            available: CITIES.len(),
        });
    }

    let restricted = pick_restricted(rng);
    let available: Vec<Corridor> = ALL_CORRIDORS
        .iter()
        .copied()
        .filter(|corridor| !restricted.contains(corridor))
        .collect();

    let mut used: HashSet<&'static str> = HashSet::new();
    let mut mapping: HashMap<String, Corridor> = HashMap::new();
    let mut target_cities: Vec<String> = Vec::with_capacity(config.target_total());
    let mut announced: Vec<String> = Vec::with_capacity(required);

    match config.shape {
        RoundShape::Single { target_count } => {
            let corridors = shuffle::sample(&available, target_count, rng);
            let cities = draw_unused_cities(target_count, &mut used, rng);
            for (corridor, city) in corridors.into_iter().zip(cities) {
                mapping.insert(city.clone(), corridor);
                target_cities.push(city.clone());
                announced.push(city);
            }
        }
        RoundShape::Doubled {
            total_cities,
            target_corridor_count,
            double_corridor_count,
        } => {
            debug_assert_eq!(total_cities, target_corridor_count + double_corridor_count);
            let corridors = shuffle::sample(&available, target_corridor_count, rng);
            let mut cities = draw_unused_cities(total_cities, &mut used, rng).into_iter();
            for (position, corridor) in corridors.into_iter().enumerate() {
                // The first `double_corridor_count` chosen corridors carry two
                // cities; both must be recalled.
                let assigned = if position < double_corridor_count { 2 } else { 1 };
                for _ in 0..assigned {
                    let Some(city) = cities.next() else { break };
                    mapping.insert(city.clone(), corridor);
                    target_cities.push(city.clone());
                    announced.push(city);
                }
            }
        }
    }

    // Distractors: announced on a restricted corridor, never to be recalled.
    // The corridor draw is with replacement across cities.
    for city in draw_unused_cities(config.restricted_count, &mut used, rng) {
        let corridor = restricted[rng.gen_range(0..restricted.len())];
        mapping.insert(city.clone(), corridor);
        announced.push(city);
    }

    debug_assert!(target_cities
        .iter()
        .all(|city| !restricted.contains(&mapping[city])));

    let (announced_cities, spacing_degraded) = match config.shape {
        RoundShape::Doubled { .. } => spacing::space_announcements(announced, &mapping, rng),
        RoundShape::Single { .. } => {
            let mut ordered = announced;
            shuffle::shuffle(&mut ordered, rng);
            (ordered, false)
        }
    };

    Ok(RoundData {
        restricted_corridors: restricted,
        target_cities,
        announced_cities,
        mapping,
        spacing_degraded,
    })
}

/// Choose the round's restricted corridors: distinct, uniform, fresh each
/// round.
fn pick_restricted(rng: &mut impl Rng) -> [Corridor; 2] {
    let drawn = shuffle::sample(&ALL_CORRIDORS, RESTRICTED_CORRIDORS_PER_ROUND, rng);
    [drawn[0], drawn[1]]
}

/// Draw `count` catalog cities not yet used this round and mark them used.
fn draw_unused_cities(
    count: usize,
    used: &mut HashSet<&'static str>,
    rng: &mut impl Rng,
) -> Vec<String> {
    let pool: Vec<&'static str> = CITIES
        .iter()
        .copied()
        .filter(|city| !used.contains(city))
        .collect();
    let drawn = shuffle::sample(&pool, count, rng);
    for &city in &drawn {
        used.insert(city);
    }
    drawn.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{resolve, Difficulty};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn seeded_rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn single_config(target_count: usize, restricted_count: usize) -> RoundConfig {
        RoundConfig {
            shape: RoundShape::Single { target_count },
            restricted_count,
        }
    }

    #[test]
    fn test_restricted_corridors_are_distinct() {
        for seed in 0..50 {
            let round = generate(&single_config(2, 1), &mut seeded_rng(seed)).unwrap();
            let [a, b] = round.restricted_corridors;
            assert_ne!(a, b);
            assert!(ALL_CORRIDORS.contains(&a));
            assert!(ALL_CORRIDORS.contains(&b));
        }
    }

    #[test]
    fn test_single_shape_counts() {
        let config = resolve(Difficulty::Medium, 1).unwrap();
        let round = generate(&config, &mut seeded_rng(3)).unwrap();

        assert_eq!(round.target_cities.len(), 4);
        assert_eq!(round.announced_cities.len(), 6);
        assert_eq!(round.mapping.len(), 6);
        assert!(!round.spacing_degraded);
    }

    #[test]
    fn test_targets_map_outside_restricted() {
        for seed in 0..30 {
            let config = resolve(Difficulty::Hard, 1).unwrap();
            let round = generate(&config, &mut seeded_rng(seed)).unwrap();
            for city in &round.target_cities {
                let corridor = round.mapping[city];
                assert!(
                    !round.restricted_corridors.contains(&corridor),
                    "target {city} landed on restricted corridor {corridor}"
                );
            }
        }
    }

    #[test]
    fn test_distractors_map_onto_restricted() {
        for seed in 0..30 {
            let config = resolve(Difficulty::Medium, 4).unwrap();
            let round = generate(&config, &mut seeded_rng(seed)).unwrap();
            let distractors = round.distractor_cities();
            assert_eq!(distractors.len(), config.restricted_count);
            for city in distractors {
                assert!(round
                    .restricted_corridors
                    .contains(&round.mapping[city]));
            }
        }
    }

    #[test]
    fn test_no_city_announced_twice() {
        for seed in 0..30 {
            let config = resolve(Difficulty::Hard, 7).unwrap();
            let round = generate(&config, &mut seeded_rng(seed)).unwrap();
            let mut seen = HashSet::new();
            for city in &round.announced_cities {
                assert!(seen.insert(city.clone()), "{city} announced twice");
                assert!(round.mapping.contains_key(city));
            }
        }
    }

    #[test]
    fn test_doubled_shape_corridor_distribution() {
        for seed in 0..30 {
            let config = resolve(Difficulty::Hard, 4).unwrap();
            let round = generate(&config, &mut seeded_rng(seed)).unwrap();

            assert_eq!(round.target_cities.len(), 7);

            let mut per_corridor: HashMap<Corridor, usize> = HashMap::new();
            for city in &round.target_cities {
                *per_corridor.entry(round.mapping[city]).or_insert(0) += 1;
            }

            let doubles = per_corridor.values().filter(|n| **n == 2).count();
            let singles = per_corridor.values().filter(|n| **n == 1).count();
            assert_eq!(doubles, 2);
            assert_eq!(singles, 3);
        }
    }

    #[test]
    fn test_single_shape_announces_everything() {
        for seed in 0..30 {
            let config = resolve(Difficulty::Easy, 4).unwrap();
            let round = generate(&config, &mut seeded_rng(seed)).unwrap();
            assert_eq!(round.announced_cities.len(), config.announced_total());
        }
    }

    #[test]
    fn test_insufficient_cities_guard() {
        let config = single_config(64, 2);
        let err = generate(&config, &mut seeded_rng(0)).unwrap_err();
        assert_eq!(
            err,
            InsufficientCities {
                required: 66,
                available: 65,
            }
        );
    }

    #[test]
    fn test_widest_single_layout_generates() {
        // 8 targets fills every non-restricted corridor.
        let config = single_config(8, 2);
        let round = generate(&config, &mut seeded_rng(0)).unwrap();
        assert_eq!(round.target_cities.len(), 8);
        assert_eq!(round.announced_cities.len(), 10);
    }

    #[test]
    fn test_same_seed_reproduces_round() {
        let config = resolve(Difficulty::Hard, 1).unwrap();
        let first = generate(&config, &mut seeded_rng(42)).unwrap();
        let second = generate(&config, &mut seeded_rng(42)).unwrap();
        assert_eq!(first, second);
    }
}
