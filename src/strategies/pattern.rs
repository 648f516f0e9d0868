//! Geometry strategies keyed on the latest draw: number-line neighbors,
//! consecutive-run extension, and 7x7 board adjacency.

use super::{ScoringContext, Strategy};
use crate::types::{Candidate, Draw, ScoreMap};

fn add_score(scores: &mut ScoreMap, n: i16, amount: f64) {
    if (1..=49).contains(&n) {
        let c = Candidate::new(n as u8).expect("range-checked");
        *scores.entry(c).or_insert(0.0) += amount;
    }
}

/// Scores the immediate number-line neighbors of the latest draw.
pub struct NeighborStrategy;

impl Strategy for NeighborStrategy {
    fn name(&self) -> &'static str {
        "neighbor"
    }

    fn min_history(&self) -> usize {
        1
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let mut scores = ScoreMap::new();
        for c in history[0].all_numbers() {
            let n = c.get() as i16;
            add_score(&mut scores, n - 1, 8.0);
            add_score(&mut scores, n + 1, 8.0);
        }
        scores
    }
}

/// Rewards extending consecutive runs present in the latest draw: if 17 and
/// 18 both came up, 16 and 19 get a boost scaled by the run length.
pub struct RunExtension;

impl Strategy for RunExtension {
    fn name(&self) -> &'static str {
        "run_extension"
    }

    fn min_history(&self) -> usize {
        1
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let mut drawn: Vec<u8> = history[0].all_numbers().map(|c| c.get()).collect();
        drawn.sort_unstable();

        let mut scores = ScoreMap::new();
        let mut run_start = 0;
        for i in 1..=drawn.len() {
            let run_ended = i == drawn.len() || drawn[i] != drawn[i - 1] + 1;
            if run_ended {
                let run_len = i - run_start;
                if run_len >= 2 {
                    let bonus = 6.0 * run_len as f64;
                    add_score(&mut scores, drawn[run_start] as i16 - 1, bonus);
                    add_score(&mut scores, drawn[i - 1] as i16 + 1, bonus);
                }
                run_start = i;
            }
        }
        scores
    }
}

/// Orthogonal adjacency on the 7x7 board laid out row-major from 1.
pub struct GridNeighbor;

impl Strategy for GridNeighbor {
    fn name(&self) -> &'static str {
        "grid_neighbor"
    }

    fn min_history(&self) -> usize {
        1
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let mut scores = ScoreMap::new();
        for c in history[0].all_numbers() {
            let (row, col) = ctx.attrs.get(c).grid;
            let (row, col) = (row as i16, col as i16);
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (nr, nc) = (row + dr, col + dc);
                if (0..7).contains(&nr) && (0..7).contains(&nc) {
                    add_score(&mut scores, nr * 7 + nc + 1, 4.0);
                }
            }
        }
        scores
    }
}
