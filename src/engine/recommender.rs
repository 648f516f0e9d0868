//! Secondary attribute recommendations derived from the selected set.

use crate::attributes::{AttributeRegistry, Wave, Zodiac};
use crate::config::SelectionConfig;
use crate::types::{Candidate, RankedCandidate};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct AttributeSummary {
    pub zodiacs: Vec<Zodiac>,
    pub primary_wave: Wave,
    pub secondary_wave: Wave,
    pub heads: Vec<u8>,
    pub tails: Vec<u8>,
}

/// Sorts keys by aggregated score descending with an ascending-key
/// tie-break, mirroring the composite ranking's ordering rule.
fn ranked_keys<K: Copy + Ord>(sums: &HashMap<K, f64>) -> Vec<K> {
    let mut entries: Vec<(K, f64)> = sums.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.into_iter().map(|(k, _)| k).collect()
}

/// Derives the group-level recommendation from the selected candidates and
/// their composite scores.
pub fn recommend_attributes(
    selected: &[Candidate],
    ranked: &[RankedCandidate],
    config: &SelectionConfig,
    attrs: &AttributeRegistry,
) -> AttributeSummary {
    let score_of: HashMap<Candidate, f64> = ranked
        .iter()
        .map(|rc| (rc.candidate, rc.total))
        .collect();

    let mut zodiac_sums: HashMap<Zodiac, f64> = HashMap::new();
    let mut wave_sums: HashMap<Wave, f64> = HashMap::new();
    let mut head_sums: HashMap<u8, f64> = HashMap::new();
    let mut tail_sums: HashMap<u8, f64> = HashMap::new();

    for c in selected {
        // Count-style aggregation still works when all scores are zero:
        // every member contributes an epsilon-free 0.0 and the ascending
        // tie-break decides.
        let score = score_of.get(c).copied().unwrap_or(0.0).max(0.0);
        let a = attrs.get(*c);
        *zodiac_sums.entry(a.zodiac).or_insert(0.0) += score;
        *wave_sums.entry(a.wave).or_insert(0.0) += score;
        *head_sums.entry(a.head).or_insert(0.0) += score;
        *tail_sums.entry(a.tail).or_insert(0.0) += score;
    }

    let mut zodiacs = ranked_keys(&zodiac_sums);
    // The selection is quota-bounded but the relaxed phase can concentrate
    // groups; pad from the remaining groups in fixed order so the zodiac
    // recommendation always has its full width.
    for z in Zodiac::ALL {
        if zodiacs.len() >= config.zodiac_picks {
            break;
        }
        if !zodiacs.contains(&z) {
            zodiacs.push(z);
        }
    }
    zodiacs.truncate(config.zodiac_picks);

    let mut waves = ranked_keys(&wave_sums);
    for w in Wave::ALL {
        if waves.len() >= 2 {
            break;
        }
        if !waves.contains(&w) {
            waves.push(w);
        }
    }
    let primary_wave = waves[0];
    let secondary_wave = waves[1];

    let mut heads = ranked_keys(&head_sums);
    heads.truncate(config.head_picks);
    let mut tails = ranked_keys(&tail_sums);
    tails.truncate(config.tail_picks);

    AttributeSummary {
        zodiacs,
        primary_wave,
        secondary_wave,
        heads,
        tails,
    }
}
