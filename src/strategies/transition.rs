//! First-order transition strategies: score candidates by what historically
//! followed the latest draw.

use super::{ScoringContext, Strategy};
use crate::types::{Candidate, Draw, ScoreMap, CANDIDATE_COUNT};

/// Frequency table keyed on the previous special number: how often did each
/// candidate come up as the next special?
pub struct SpecialTransition;

impl Strategy for SpecialTransition {
    fn name(&self) -> &'static str {
        "special_transition"
    }

    fn min_history(&self) -> usize {
        10
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let history = super::window(history, ctx.config.analysis_window);
        let mut table = [[0u32; CANDIDATE_COUNT]; CANDIDATE_COUNT];
        // history[i] follows history[i + 1] in time.
        for pair in history.windows(2) {
            let prev = pair[1].special();
            let next = pair[0].special();
            table[prev.index()][next.index()] += 1;
        }

        let last = history[0].special();
        let row = &table[last.index()];
        Candidate::all()
            .filter(|c| row[c.index()] > 0)
            .map(|c| (c, row[c.index()] as f64 * 10.0))
            .collect()
    }
}

/// The full Markov projection: transition counts over all seven numbers of
/// consecutive draws, projected from every number of the latest draw.
pub struct FullTransition;

impl Strategy for FullTransition {
    fn name(&self) -> &'static str {
        "full_transition"
    }

    fn min_history(&self) -> usize {
        20
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let history = super::window(history, ctx.config.analysis_window);
        let mut table = [[0u32; CANDIDATE_COUNT]; CANDIDATE_COUNT];
        for pair in history.windows(2) {
            for prev in pair[1].all_numbers() {
                for next in pair[0].all_numbers() {
                    table[prev.index()][next.index()] += 1;
                }
            }
        }

        let mut scores = ScoreMap::new();
        for c in Candidate::all() {
            let total: u32 = history[0]
                .all_numbers()
                .map(|prev| table[prev.index()][c.index()])
                .sum();
            if total > 0 {
                scores.insert(c, total as f64 * 3.0);
            }
        }
        scores
    }
}
