//! The strategy catalog: independent, stateless scoring heuristics.
//!
//! Every strategy is a pure function from history to a sparse score map;
//! score magnitudes are strategy-local and reconciled by the aggregator's
//! weights only.

pub mod transition;
pub mod omission;
pub mod pattern;
pub mod resonance;
pub mod structural;
pub mod signal;
pub mod registry;

pub use registry::StrategyRegistry;

use crate::attributes::AttributeRegistry;
use crate::config::ScoringConfig;
use crate::types::{Draw, ScoreMap, CANDIDATE_COUNT};

/// Read-only context handed to every strategy invocation.
pub struct ScoringContext<'a> {
    pub attrs: &'a AttributeRegistry,
    pub config: &'a ScoringConfig,
}

/// A single scoring heuristic.
///
/// Implementations must be pure and read-only over history: identical input
/// yields an identical score map. History is most-recent-first.
pub trait Strategy: Send + Sync {
    /// Stable identifier, used as the weight-vector key.
    fn name(&self) -> &'static str;

    /// Minimum history length below which the strategy has no opinion.
    fn min_history(&self) -> usize;

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap;

    /// Guarded entry point: insufficient history yields an empty map,
    /// never an error.
    fn evaluate(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        if history.len() < self.min_history() {
            ScoreMap::new()
        } else {
            self.score(history, ctx)
        }
    }
}

/// Most-recent `len` draws (the whole slice when shorter).
pub(crate) fn window(history: &[Draw], len: usize) -> &[Draw] {
    &history[..history.len().min(len)]
}

/// Appearance counts over all seven numbers of every draw in the slice.
pub(crate) fn appearance_counts(history: &[Draw]) -> [u32; CANDIDATE_COUNT] {
    let mut counts = [0u32; CANDIDATE_COUNT];
    for draw in history {
        for c in draw.all_numbers() {
            counts[c.index()] += 1;
        }
    }
    counts
}
