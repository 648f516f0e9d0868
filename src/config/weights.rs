use super::traits::ConfigSection;
use crate::error::DctaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Relative accuracy improvement that triggers a weight increase.
    pub improve_threshold: f64,
    /// Relative accuracy degradation that triggers a weight decrease.
    pub degrade_threshold: f64,
    /// Multiplicative boost applied on improvement (0.15 = +15%).
    pub boost: f64,
    /// Multiplicative cut applied on degradation (0.10 = -10%).
    pub cut: f64,
    /// Bound on each strategy's rolling accuracy queue.
    pub accuracy_history_len: usize,
    /// Accuracies needed before the trend comparison can run (two windows
    /// of `trend_window` each).
    pub trend_window: usize,
    /// Minimum hours between adjustment passes.
    pub cooldown_hours: i64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            improve_threshold: 0.20,
            degrade_threshold: 0.20,
            boost: 0.15,
            cut: 0.10,
            accuracy_history_len: 12,
            trend_window: 3,
            cooldown_hours: 24,
        }
    }
}

impl ConfigSection for WeightConfig {
    fn section_name() -> &'static str {
        "weights"
    }

    fn validate(&self) -> Result<(), DctaError> {
        if self.improve_threshold <= 0.0 || self.degrade_threshold <= 0.0 {
            return Err(DctaError::Configuration(
                "Trend thresholds must be positive".to_string(),
            ));
        }
        if self.boost <= 0.0 || !(0.0..1.0).contains(&self.cut) {
            return Err(DctaError::Configuration(
                "Boost must be positive and cut must be in [0, 1)".to_string(),
            ));
        }
        if self.trend_window == 0 || self.accuracy_history_len < self.trend_window * 2 {
            return Err(DctaError::Configuration(
                "Accuracy history must hold at least two trend windows".to_string(),
            ));
        }
        if self.cooldown_hours < 0 {
            return Err(DctaError::Configuration(
                "Cooldown cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
