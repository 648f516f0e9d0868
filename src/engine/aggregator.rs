//! Weighted composition of strategy outputs into one ranked candidate list.

use crate::types::{Candidate, RankedCandidate, ScoreMap};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Weighted sum of all strategy score maps over the full candidate pool.
///
/// The ranking is total-ordered and reproducible: descending composite
/// score, ties broken by ascending candidate number. An all-zero input
/// therefore degenerates to 1, 2, 3 and so on, never an arbitrary order.
pub fn aggregate(
    outputs: &[(&'static str, ScoreMap)],
    weights: &HashMap<String, f64>,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = Candidate::all()
        .map(|c| {
            let mut total = 0.0;
            let mut contributions = HashMap::new();
            for (name, scores) in outputs {
                if let Some(score) = scores.get(&c) {
                    let weight = weights.get(*name).copied().unwrap_or(1.0);
                    let contribution = score * weight;
                    total += contribution;
                    contributions.insert((*name).to_string(), contribution);
                }
            }
            RankedCandidate {
                candidate: c,
                total,
                contributions,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    ranked
}

/// Top-`k` candidates of a single score map under the same ordering as the
/// composite ranking.
pub fn top_k(scores: &ScoreMap, k: usize) -> Vec<Candidate> {
    let mut entries: Vec<(Candidate, f64)> = scores.iter().map(|(c, s)| (*c, *s)).collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries.into_iter().take(k).map(|(c, _)| c).collect()
}
