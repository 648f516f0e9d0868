use super::traits::ConfigSection;
use crate::error::DctaError;
use serde::{Deserialize, Serialize};

/// Knobs shared by the strategy catalog and the generation pipeline.
///
/// The individual magnitudes are heuristic defaults; each strategy's
/// qualitative response to its signal is the contract, not the exact values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Most-recent draws fed to the strategies. The decay-frequency signal
    /// needs a long run-in to stabilise.
    pub analysis_window: usize,
    /// Below this many draws the pipeline is bypassed in favour of the
    /// frequency fallback.
    pub min_history_for_analysis: usize,
    /// Window for the category heat strategies (zodiac/wave/tail/element).
    pub heat_window: usize,
    /// Window for the recent-repeat strategy.
    pub hot_window: usize,
    /// Window for entropy and prime-balance accounting.
    pub balance_window: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            analysis_window: 150,
            min_history_for_analysis: 30,
            heat_window: 30,
            hot_window: 10,
            balance_window: 40,
        }
    }
}

impl ConfigSection for ScoringConfig {
    fn section_name() -> &'static str {
        "scoring"
    }

    fn validate(&self) -> Result<(), DctaError> {
        if self.analysis_window == 0 {
            return Err(DctaError::Configuration(
                "Analysis window must be positive".to_string(),
            ));
        }
        if self.min_history_for_analysis == 0 {
            return Err(DctaError::Configuration(
                "Minimum analysis history must be positive".to_string(),
            ));
        }
        if self.heat_window == 0 || self.hot_window == 0 || self.balance_window == 0 {
            return Err(DctaError::Configuration(
                "Strategy windows must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
