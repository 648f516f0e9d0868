use super::store::WeightStore;
use crate::config::WeightConfig;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightAction {
    Increased,
    Decreased,
    Held,
}

/// One strategy's outcome from an adjustment pass; `updated` is the value
/// after renormalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightChange {
    pub strategy: String,
    pub previous: f64,
    pub updated: f64,
    pub action: WeightAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    /// False when the pass was skipped by the cooldown.
    pub applied: bool,
    pub changes: Vec<WeightChange>,
}

/// Trend-following weight adjustment over each strategy's rolling accuracy
/// queue. Rate-limited to one pass per cooldown period so noisy short
/// windows cannot thrash the vector.
pub struct WeightAdapter {
    config: WeightConfig,
}

impl WeightAdapter {
    pub fn new(config: WeightConfig) -> Self {
        Self { config }
    }

    pub fn adjust(&self, store: &mut WeightStore, now: DateTime<Utc>) -> AdjustmentOutcome {
        if let Some(last) = store.last_pass {
            if now - last < Duration::hours(self.config.cooldown_hours) {
                log::debug!("weight adjustment skipped: cooldown until {}", last);
                return AdjustmentOutcome {
                    applied: false,
                    changes: Vec::new(),
                };
            }
        }

        let w = self.config.trend_window;
        let mut actions = Vec::new();
        for entry in store.entries_mut() {
            let hist = &entry.accuracy_history;
            if hist.len() < w * 2 {
                actions.push((entry.name.clone(), entry.current_weight, WeightAction::Held));
                continue;
            }
            let recent: f64 = hist.iter().rev().take(w).sum::<f64>() / w as f64;
            let prior: f64 = hist.iter().rev().skip(w).take(w).sum::<f64>() / w as f64;
            let relative = (recent - prior) / prior.max(1e-9);

            let action = if relative > self.config.improve_threshold {
                entry.current_weight *= 1.0 + self.config.boost;
                entry.last_adjustment = Some(now);
                WeightAction::Increased
            } else if relative < -self.config.degrade_threshold {
                entry.current_weight *= 1.0 - self.config.cut;
                entry.last_adjustment = Some(now);
                WeightAction::Decreased
            } else {
                WeightAction::Held
            };
            actions.push((entry.name.clone(), entry.current_weight, action));
        }

        let touched = actions
            .iter()
            .any(|(_, _, a)| *a != WeightAction::Held);
        if touched {
            store.renormalize();
        }
        store.last_pass = Some(now);

        let changes = actions
            .into_iter()
            .map(|(name, previous, action)| {
                let updated = store.weight_of(&name);
                WeightChange {
                    strategy: name,
                    previous,
                    updated,
                    action,
                }
            })
            .collect();

        AdjustmentOutcome {
            applied: true,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap()
    }

    fn store_with_trend(up: &str, down: &str, flat: &str) -> WeightStore {
        let mut store = WeightStore::new(&[up, down, flat]);
        // Oldest first: up improves, down degrades, flat holds.
        for acc in [0.2, 0.2, 0.2, 0.4, 0.4, 0.4] {
            store.record_accuracy(up, acc, 12);
        }
        for acc in [0.4, 0.4, 0.4, 0.2, 0.2, 0.2] {
            store.record_accuracy(down, acc, 12);
        }
        for acc in [0.3, 0.3, 0.3, 0.3, 0.3, 0.3] {
            store.record_accuracy(flat, acc, 12);
        }
        store
    }

    #[test]
    fn test_trend_directions() {
        let mut store = store_with_trend("up", "down", "flat");
        let adapter = WeightAdapter::new(WeightConfig::default());
        let outcome = adapter.adjust(&mut store, at(1));
        assert!(outcome.applied);

        let by_name = |n: &str| {
            outcome
                .changes
                .iter()
                .find(|c| c.strategy == n)
                .unwrap()
                .action
        };
        assert_eq!(by_name("up"), WeightAction::Increased);
        assert_eq!(by_name("down"), WeightAction::Decreased);
        assert_eq!(by_name("flat"), WeightAction::Held);

        // Relative ordering after renormalization.
        assert!(store.weight_of("up") > store.weight_of("flat"));
        assert!(store.weight_of("down") < store.weight_of("flat"));
    }

    #[test]
    fn test_normalization_preserves_budget() {
        let mut store = store_with_trend("up", "down", "flat");
        let adapter = WeightAdapter::new(WeightConfig::default());
        adapter.adjust(&mut store, at(1));
        assert!((store.weight_sum() - store.budget()).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_blocks_second_pass() {
        let mut store = store_with_trend("up", "down", "flat");
        let adapter = WeightAdapter::new(WeightConfig::default());
        assert!(adapter.adjust(&mut store, at(1)).applied);
        let weight_after_first = store.weight_of("up");

        // Same day: inside the 24h cooldown.
        let second = adapter.adjust(&mut store, at(1));
        assert!(!second.applied);
        assert_eq!(store.weight_of("up"), weight_after_first);

        // Two days later the pass runs again.
        assert!(adapter.adjust(&mut store, at(3)).applied);
    }

    #[test]
    fn test_insufficient_samples_hold() {
        let mut store = WeightStore::new(&["a"]);
        store.record_accuracy("a", 0.9, 12);
        let adapter = WeightAdapter::new(WeightConfig::default());
        let outcome = adapter.adjust(&mut store, at(1));
        assert!(outcome.applied);
        assert_eq!(outcome.changes[0].action, WeightAction::Held);
        assert_eq!(store.weight_of("a"), 1.0);
    }
}
