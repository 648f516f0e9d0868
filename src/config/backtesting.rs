use super::traits::ConfigSection;
use crate::error::DctaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestingConfig {
    /// Trailing replay window (most-recent draws held out one at a time).
    pub window: usize,
    /// Replay points whose training slice is shorter than this are skipped,
    /// never counted as misses.
    pub min_training_draws: usize,
    /// Top-K list size when scoring a single strategy in isolation.
    pub per_strategy_top_k: usize,
    /// Top-K list size for the weighted composite.
    pub composite_top_k: usize,
    /// Bound on the trailing per-replay result log kept in the report.
    pub max_result_log: usize,
}

impl Default for BacktestingConfig {
    fn default() -> Self {
        Self {
            window: 30,
            min_training_draws: 50,
            per_strategy_top_k: 12,
            composite_top_k: 18,
            max_result_log: 100,
        }
    }
}

impl ConfigSection for BacktestingConfig {
    fn section_name() -> &'static str {
        "backtesting"
    }

    fn validate(&self) -> Result<(), DctaError> {
        if self.window == 0 {
            return Err(DctaError::Configuration(
                "Backtest window must be positive".to_string(),
            ));
        }
        if self.per_strategy_top_k == 0 || self.composite_top_k == 0 {
            return Err(DctaError::Configuration(
                "Top-K sizes must be positive".to_string(),
            ));
        }
        if self.composite_top_k > crate::types::CANDIDATE_COUNT {
            return Err(DctaError::Configuration(
                "Composite top-K cannot exceed the candidate pool".to_string(),
            ));
        }
        Ok(())
    }
}
