use crate::types::Candidate;
use crate::weights::AdjustmentOutcome;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One walk-forward replay point: what the composite would have predicted
/// against what actually came up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestResult {
    pub replayed_draw_id: String,
    pub predicted_top_k: Vec<Candidate>,
    pub actual: Vec<Candidate>,
    pub hit_count: usize,
    /// Weighted contribution each strategy made to the predicted candidates
    /// that actually hit.
    pub per_strategy_contribution: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyAccuracy {
    pub name: String,
    pub hits: u32,
    /// Replay points where the strategy produced a non-empty top-K; points
    /// where it had no opinion are excluded from the denominator.
    pub evaluated: u32,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestReport {
    pub window_requested: usize,
    /// Replay points actually evaluated.
    pub replayed: u32,
    /// Replay points skipped for lack of training data (never misses).
    pub skipped: u32,
    pub composite_hits: u32,
    pub composite_accuracy: f64,
    pub per_strategy: Vec<StrategyAccuracy>,
    /// Bounded trailing log of replay points, most recent first.
    pub results: Vec<BacktestResult>,
    /// Outcome of the adjustment pass the report triggered, if the caller
    /// committed one.
    pub weight_outcome: Option<AdjustmentOutcome>,
}
