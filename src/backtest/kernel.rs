//! Causality-respecting walk-forward replay of the strategy pipeline.

use super::report::{BacktestReport, BacktestResult, StrategyAccuracy};
use crate::attributes::AttributeRegistry;
use crate::config::{BacktestingConfig, ScoringConfig};
use crate::engine::aggregator::{aggregate, top_k};
use crate::strategies::{ScoringContext, StrategyRegistry};
use crate::types::Draw;
use std::collections::HashMap;

/// Training data for replay index `i`: strictly older draws only. This is
/// the causality invariant the whole kernel rests on.
pub(crate) fn training_slice(history: &[Draw], i: usize) -> &[Draw] {
    &history[i + 1..]
}

pub struct BacktestKernel<'a> {
    registry: &'a StrategyRegistry,
    attrs: &'a AttributeRegistry,
    scoring: &'a ScoringConfig,
    config: &'a BacktestingConfig,
}

impl<'a> BacktestKernel<'a> {
    pub fn new(
        registry: &'a StrategyRegistry,
        attrs: &'a AttributeRegistry,
        scoring: &'a ScoringConfig,
        config: &'a BacktestingConfig,
    ) -> Self {
        Self {
            registry,
            attrs,
            scoring,
            config,
        }
    }

    /// Replays up to `window` most-recent draws against the committed
    /// weight vector. A hit is any overlap between the top-K prediction and
    /// the seven numbers of the held-out draw (the any-of-seven criterion).
    pub fn run(
        &self,
        history: &[Draw],
        window: usize,
        weights: &HashMap<String, f64>,
    ) -> BacktestReport {
        let ctx = ScoringContext {
            attrs: self.attrs,
            config: self.scoring,
        };
        let names = self.registry.names();
        let mut strategy_hits: HashMap<&str, u32> = HashMap::new();
        let mut strategy_evaluated: HashMap<&str, u32> = HashMap::new();

        let mut replayed = 0u32;
        let mut skipped = 0u32;
        let mut composite_hits = 0u32;
        let mut results = Vec::new();

        let requested = window;
        let window = window.min(history.len());
        for i in 0..window {
            let training = training_slice(history, i);
            if training.len() < self.config.min_training_draws {
                skipped += 1;
                continue;
            }
            replayed += 1;
            let held_out = &history[i];

            let outputs = self.registry.evaluate_all(training, &ctx);

            for (name, scores) in &outputs {
                if scores.is_empty() {
                    continue;
                }
                *strategy_evaluated.entry(*name).or_insert(0) += 1;
                let picks = top_k(scores, self.config.per_strategy_top_k);
                if picks.iter().any(|c| held_out.contains(*c)) {
                    *strategy_hits.entry(*name).or_insert(0) += 1;
                }
            }

            let ranked = aggregate(&outputs, weights);
            let predicted: Vec<_> = ranked
                .iter()
                .take(self.config.composite_top_k)
                .map(|rc| rc.candidate)
                .collect();
            let hit_count = predicted.iter().filter(|c| held_out.contains(**c)).count();
            if hit_count > 0 {
                composite_hits += 1;
            }

            let mut per_strategy_contribution: HashMap<String, f64> = HashMap::new();
            for rc in ranked.iter().take(self.config.composite_top_k) {
                if held_out.contains(rc.candidate) {
                    for (name, contribution) in &rc.contributions {
                        *per_strategy_contribution.entry(name.clone()).or_insert(0.0) +=
                            contribution;
                    }
                }
            }

            results.push(BacktestResult {
                replayed_draw_id: held_out.id().to_string(),
                predicted_top_k: predicted,
                actual: held_out.all_numbers().collect(),
                hit_count,
                per_strategy_contribution,
            });
            // Replay walks newest to oldest, so truncation keeps the most
            // recent entries.
            results.truncate(self.config.max_result_log);
        }

        let per_strategy = names
            .iter()
            .map(|name| {
                let evaluated = strategy_evaluated.get(name).copied().unwrap_or(0);
                let hits = strategy_hits.get(name).copied().unwrap_or(0);
                let accuracy = if evaluated > 0 {
                    hits as f64 / evaluated as f64
                } else {
                    0.0
                };
                StrategyAccuracy {
                    name: name.to_string(),
                    hits,
                    evaluated,
                    accuracy,
                }
            })
            .collect();

        let composite_accuracy = if replayed > 0 {
            composite_hits as f64 / replayed as f64
        } else {
            0.0
        };
        log::debug!(
            "backtest replayed {} of {} points, composite accuracy {:.3}",
            replayed,
            window,
            composite_accuracy
        );

        BacktestReport {
            window_requested: requested,
            replayed,
            skipped,
            composite_hits,
            composite_accuracy,
            per_strategy,
            results,
            weight_outcome: None,
        }
    }
}
