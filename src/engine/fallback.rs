//! Pure-frequency ranking used when history is too short for the full
//! strategy pipeline.

use crate::strategies::appearance_counts;
use crate::types::{Draw, RankedCandidate, ScoreMap};
use std::collections::HashMap;

/// Ranks the pool by raw appearance count over whatever history exists.
/// With no history at all the ranking degenerates to ascending candidate
/// order via the aggregator's tie-break.
pub fn frequency_ranking(history: &[Draw]) -> Vec<RankedCandidate> {
    let counts = appearance_counts(history);
    let mut scores = ScoreMap::new();
    for c in crate::types::Candidate::all() {
        let count = counts[c.index()];
        if count > 0 {
            scores.insert(c, count as f64);
        }
    }
    let outputs: Vec<(&'static str, ScoreMap)> = vec![("frequency", scores)];
    crate::engine::aggregator::aggregate(&outputs, &HashMap::new())
}
