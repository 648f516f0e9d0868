use super::traits::ConfigSection;
use crate::error::DctaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Size of the recommended number set.
    pub target_size: usize,
    /// Constrained-phase cap per zodiac group.
    pub max_per_zodiac: usize,
    /// Constrained-phase cap per wave.
    pub max_per_wave: usize,
    /// Zodiac groups surfaced in the attribute recommendation.
    pub zodiac_picks: usize,
    /// Head digits surfaced, at most.
    pub head_picks: usize,
    /// Tail digits surfaced, at most.
    pub tail_picks: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_size: 18,
            max_per_zodiac: 2,
            max_per_wave: 7,
            zodiac_picks: 6,
            head_picks: 3,
            tail_picks: 5,
        }
    }
}

impl ConfigSection for SelectionConfig {
    fn section_name() -> &'static str {
        "selection"
    }

    fn validate(&self) -> Result<(), DctaError> {
        if self.target_size == 0 || self.target_size > crate::types::CANDIDATE_COUNT {
            return Err(DctaError::Configuration(
                "Target size must be in 1..=49".to_string(),
            ));
        }
        if self.max_per_zodiac == 0 || self.max_per_wave == 0 {
            return Err(DctaError::Configuration(
                "Quota caps must be positive".to_string(),
            ));
        }
        if self.zodiac_picks == 0 || self.zodiac_picks > 12 {
            return Err(DctaError::Configuration(
                "Zodiac picks must be in 1..=12".to_string(),
            ));
        }
        Ok(())
    }
}
