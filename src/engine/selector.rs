//! Two-phase diversity-constrained selection from the composite ranking.

use crate::attributes::AttributeRegistry;
use crate::config::SelectionConfig;
use crate::types::{Candidate, RankedCandidate};
use std::collections::HashMap;

/// Picks `config.target_size` distinct candidates from the ranking.
///
/// Phase 1 walks the ranking and accepts candidates while the per-zodiac and
/// per-wave caps permit; phase 2 fills any shortfall from the best remaining
/// candidates with the caps relaxed, so selection always terminates at
/// exactly the target size.
pub fn select(
    ranked: &[RankedCandidate],
    config: &SelectionConfig,
    attrs: &AttributeRegistry,
) -> Vec<Candidate> {
    let mut selected: Vec<Candidate> = Vec::with_capacity(config.target_size);
    let mut zodiac_counts = HashMap::new();
    let mut wave_counts = HashMap::new();

    for rc in ranked {
        if selected.len() == config.target_size {
            break;
        }
        let zodiac = attrs.zodiac(rc.candidate);
        let wave = attrs.wave(rc.candidate);
        let z = zodiac_counts.entry(zodiac).or_insert(0usize);
        let w = wave_counts.entry(wave).or_insert(0usize);
        if *z < config.max_per_zodiac && *w < config.max_per_wave {
            *z += 1;
            *w += 1;
            selected.push(rc.candidate);
        }
    }

    if selected.len() < config.target_size {
        log::debug!(
            "quota phase selected {} of {}; relaxing caps",
            selected.len(),
            config.target_size
        );
        for rc in ranked {
            if selected.len() == config.target_size {
                break;
            }
            if !selected.contains(&rc.candidate) {
                selected.push(rc.candidate);
            }
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreMap;
    use std::collections::HashMap as Map;

    fn ranking_with_top(scored: &[(u8, f64)]) -> Vec<RankedCandidate> {
        let mut scores = ScoreMap::new();
        for (n, s) in scored {
            scores.insert(Candidate::new(*n).unwrap(), *s);
        }
        let outputs: Vec<(&'static str, ScoreMap)> = vec![("test", scores)];
        crate::engine::aggregator::aggregate(&outputs, &Map::new())
    }

    #[test]
    fn test_select_returns_exact_target_size() {
        let ranked = ranking_with_top(&[]);
        let config = SelectionConfig::default();
        let attrs = AttributeRegistry::new();
        let selected = select(&ranked, &config, &attrs);
        assert_eq!(selected.len(), config.target_size);
        let unique: std::collections::HashSet<_> = selected.iter().collect();
        assert_eq!(unique.len(), config.target_size);
    }

    #[test]
    fn test_zodiac_quota_enforced_in_constrained_phase() {
        // Push all five Snake members to the top of the ranking.
        let ranked = ranking_with_top(&[
            (1, 100.0),
            (13, 99.0),
            (25, 98.0),
            (37, 97.0),
            (49, 96.0),
        ]);
        let config = SelectionConfig::default();
        let attrs = AttributeRegistry::new();
        let selected = select(&ranked, &config, &attrs);

        let snakes = selected
            .iter()
            .filter(|c| attrs.zodiac(**c) == crate::attributes::Zodiac::Snake)
            .count();
        assert_eq!(snakes, config.max_per_zodiac);
    }

    #[test]
    fn test_wave_quota_enforced_in_constrained_phase() {
        // Ten red-wave candidates across ten distinct zodiacs lead the
        // ranking, so only the wave cap can stop them.
        let reds = [1u8, 2, 7, 8, 12, 18, 23, 29, 34, 40];
        let scored: Vec<(u8, f64)> = reds
            .iter()
            .enumerate()
            .map(|(i, n)| (*n, 100.0 - i as f64))
            .collect();
        let ranked = ranking_with_top(&scored);
        let config = SelectionConfig::default();
        let attrs = AttributeRegistry::new();
        let selected = select(&ranked, &config, &attrs);

        let red_count = selected
            .iter()
            .filter(|c| attrs.wave(**c) == crate::attributes::Wave::Red)
            .count();
        assert_eq!(red_count, config.max_per_wave);
        // The first seven by score make the cut, the trailing three do not.
        for n in &reds[..7] {
            assert!(selected.contains(&Candidate::new(*n).unwrap()));
        }
        for n in &reds[7..] {
            assert!(!selected.contains(&Candidate::new(*n).unwrap()));
        }
    }

    #[test]
    fn test_relaxed_phase_fills_when_quotas_starve() {
        // A tiny target with caps of one per zodiac still terminates.
        let ranked = ranking_with_top(&[(1, 100.0), (13, 99.0), (25, 98.0)]);
        let config = SelectionConfig {
            target_size: 3,
            max_per_zodiac: 1,
            max_per_wave: 1,
            ..SelectionConfig::default()
        };
        let attrs = AttributeRegistry::new();
        let selected = select(&ranked, &config, &attrs);
        assert_eq!(selected.len(), 3);
    }
}
