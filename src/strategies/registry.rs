use super::{
    omission::{MeanGapOmission, OmissionPressure, RecentHot},
    pattern::{GridNeighbor, NeighborStrategy, RunExtension},
    resonance::{ElementHeat, TailHeat, WaveHeat, ZodiacBalance, ZodiacHeat},
    signal::{DecayFrequency, EntropyBalance, LogisticDrift, SpecialPeriodicity},
    structural::{ModularCohort, PrimeBalance, SequenceMembership, SymmetryPair},
    transition::{FullTransition, SpecialTransition},
    ScoringContext, Strategy,
};
use crate::types::{Draw, ScoreMap};
use rayon::prelude::*;
use std::sync::Arc;

/// The full strategy catalog in a fixed registration order. The order is
/// part of the deterministic contract: score outputs, weight vectors and
/// reports all follow it.
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        let strategies: Vec<Arc<dyn Strategy>> = vec![
            Arc::new(SpecialTransition),
            Arc::new(FullTransition),
            Arc::new(MeanGapOmission),
            Arc::new(OmissionPressure),
            Arc::new(RecentHot),
            Arc::new(NeighborStrategy),
            Arc::new(RunExtension),
            Arc::new(GridNeighbor),
            Arc::new(ZodiacHeat),
            Arc::new(ZodiacBalance),
            Arc::new(WaveHeat),
            Arc::new(TailHeat),
            Arc::new(ElementHeat),
            Arc::new(SymmetryPair),
            Arc::new(ModularCohort),
            Arc::new(SequenceMembership),
            Arc::new(PrimeBalance),
            Arc::new(DecayFrequency),
            Arc::new(EntropyBalance),
            Arc::new(LogisticDrift),
            Arc::new(SpecialPeriodicity),
        ];
        Self { strategies }
    }

    pub fn all(&self) -> &[Arc<dyn Strategy>] {
        &self.strategies
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Strategy>> {
        self.strategies
            .iter()
            .find(|s| s.name() == name)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Runs every strategy over the history. The strategy phase is pure and
    /// read-only, so it fans out across threads; collection preserves
    /// registration order, keeping the result deterministic.
    pub fn evaluate_all(
        &self,
        history: &[Draw],
        ctx: &ScoringContext,
    ) -> Vec<(&'static str, ScoreMap)> {
        self.strategies
            .par_iter()
            .map(|s| (s.name(), s.evaluate(history, ctx)))
            .collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeRegistry;
    use crate::config::ScoringConfig;
    use crate::strategies::testutil::cycling_history;

    #[test]
    fn test_registry_names_are_unique() {
        let registry = StrategyRegistry::new();
        let mut names = registry.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = StrategyRegistry::new();
        assert!(registry.get("special_transition").is_some());
        assert!(registry.get("no_such_strategy").is_none());
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let registry = StrategyRegistry::new();
        let attrs = AttributeRegistry::new();
        let config = ScoringConfig::default();
        let ctx = ScoringContext {
            attrs: &attrs,
            config: &config,
        };
        let history = cycling_history(80, 1);
        let outputs = registry.evaluate_all(&history, &ctx);
        let names: Vec<&str> = outputs.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, registry.names());
    }

    #[test]
    fn test_short_history_yields_empty_maps_not_errors() {
        let registry = StrategyRegistry::new();
        let attrs = AttributeRegistry::new();
        let config = ScoringConfig::default();
        let ctx = ScoringContext {
            attrs: &attrs,
            config: &config,
        };
        let history = cycling_history(1, 1);
        let outputs = registry.evaluate_all(&history, &ctx);
        // Strategies needing more than one draw stay silent; the latest-draw
        // geometry strategies still speak.
        assert!(outputs
            .iter()
            .find(|(n, _)| *n == "special_transition")
            .unwrap()
            .1
            .is_empty());
        assert!(!outputs
            .iter()
            .find(|(n, _)| *n == "neighbor")
            .unwrap()
            .1
            .is_empty());
    }
}
