//! The generation pipeline and its public facade.

pub mod aggregator;
pub mod selector;
pub mod recommender;
pub mod fallback;

use crate::attributes::AttributeRegistry;
use crate::backtest::{BacktestKernel, BacktestReport};
use crate::config::AppConfig;
use crate::strategies::{ScoringContext, StrategyRegistry};
use crate::types::{Candidate, Draw, RankedCandidate, Recommendation, RecommendationSource};
use crate::weights::{StrategyWeight, WeightAdapter, WeightStore};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// Long-lived recommendation service: owns the strategy catalog, the
/// attribute registry and the only mutable state in the crate, the weight
/// store. Generation reads a committed weight snapshot; backtesting is the
/// single writer.
pub struct Engine {
    registry: Arc<StrategyRegistry>,
    attrs: Arc<AttributeRegistry>,
    config: AppConfig,
    weights: Arc<RwLock<WeightStore>>,
    adapter: WeightAdapter,
}

impl Engine {
    pub fn new(config: AppConfig) -> Self {
        let registry = Arc::new(StrategyRegistry::new());
        let store = WeightStore::new(&registry.names());
        Self::assemble(config, registry, store)
    }

    /// Restores weight state persisted by the caller; corrupt state falls
    /// back to equal defaults inside the store.
    pub fn with_persisted_weights(config: AppConfig, persisted: Vec<StrategyWeight>) -> Self {
        let registry = Arc::new(StrategyRegistry::new());
        let store = WeightStore::from_persisted(&registry.names(), persisted);
        Self::assemble(config, registry, store)
    }

    fn assemble(config: AppConfig, registry: Arc<StrategyRegistry>, store: WeightStore) -> Self {
        let adapter = WeightAdapter::new(config.weights.clone());
        Self {
            registry,
            attrs: Arc::new(AttributeRegistry::new()),
            config,
            weights: Arc::new(RwLock::new(store)),
            adapter,
        }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn attributes(&self) -> &AttributeRegistry {
        &self.attrs
    }

    /// Snapshot of the persistent weight state, for external storage.
    pub fn weight_state(&self) -> Vec<StrategyWeight> {
        self.weights.read().unwrap().entries().to_vec()
    }

    pub fn weight_store(&self) -> Arc<RwLock<WeightStore>> {
        Arc::clone(&self.weights)
    }

    /// Produces a recommendation from the given history, most-recent-first.
    ///
    /// Never fails in normal use: short or even empty history lands in the
    /// frequency fallback, and every path yields a full-width result.
    pub fn generate(&self, history: &[Draw]) -> Recommendation {
        if history.len() < self.config.scoring.min_history_for_analysis {
            log::info!(
                "history has {} draws, below the {}-draw analysis floor; using fallback",
                history.len(),
                self.config.scoring.min_history_for_analysis
            );
            let ranked = fallback::frequency_ranking(history);
            return self.finish(
                ranked,
                RecommendationSource::Fallback,
                Some(format!(
                    "insufficient history ({} draws); frequency ranking",
                    history.len()
                )),
            );
        }

        let ctx = ScoringContext {
            attrs: &self.attrs,
            config: &self.config.scoring,
        };
        let outputs = self.registry.evaluate_all(history, &ctx);
        let weights = self.weights.read().unwrap().vector();
        let ranked = aggregator::aggregate(&outputs, &weights);
        self.finish(ranked, RecommendationSource::Composite, None)
    }

    fn finish(
        &self,
        ranked: Vec<RankedCandidate>,
        source: RecommendationSource,
        rationale: Option<String>,
    ) -> Recommendation {
        let mut numbers: Vec<Candidate> =
            selector::select(&ranked, &self.config.selection, &self.attrs);
        let summary = recommender::recommend_attributes(
            &numbers,
            &ranked,
            &self.config.selection,
            &self.attrs,
        );
        numbers.sort_unstable();

        Recommendation {
            numbers,
            zodiacs: summary.zodiacs,
            primary_wave: summary.primary_wave,
            secondary_wave: summary.secondary_wave,
            heads: summary.heads,
            tails: summary.tails,
            source,
            rationale,
        }
    }

    /// Out-of-band walk-forward evaluation. Replays history against the
    /// committed weight vector, then records accuracies and runs the
    /// rate-limited adjustment pass under the write lock. Generation never
    /// waits on this.
    pub fn run_backtest(&self, history: &[Draw], window: usize) -> BacktestReport {
        self.run_backtest_at(history, window, Utc::now())
    }

    /// Clock-injected variant used by the scheduler and the tests.
    pub fn run_backtest_at(
        &self,
        history: &[Draw],
        window: usize,
        now: DateTime<Utc>,
    ) -> BacktestReport {
        let kernel = BacktestKernel::new(
            &self.registry,
            &self.attrs,
            &self.config.scoring,
            &self.config.backtesting,
        );
        let weights = self.weights.read().unwrap().vector();
        let mut report = kernel.run(history, window, &weights);

        if report.replayed == 0 {
            log::info!("backtest evaluated no replay points; skipping weight update");
            return report;
        }

        let mut store = self.weights.write().unwrap();
        for accuracy in &report.per_strategy {
            if accuracy.evaluated > 0 {
                store.record_accuracy(
                    &accuracy.name,
                    accuracy.accuracy,
                    self.config.weights.accuracy_history_len,
                );
            }
        }
        store.record_composite(report.composite_accuracy, now);
        report.weight_outcome = Some(self.adapter.adjust(&mut store, now));
        report
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
