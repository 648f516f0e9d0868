use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Per-strategy adaptive state: the only state that persists across
/// generation cycles. Serializable so a caller-side store can carry it
/// across restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyWeight {
    pub name: String,
    pub current_weight: f64,
    /// Rolling backtest accuracies, oldest first, bounded by config.
    pub accuracy_history: VecDeque<f64>,
    pub last_adjustment: Option<DateTime<Utc>>,
}

impl StrategyWeight {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            current_weight: 1.0,
            accuracy_history: VecDeque::new(),
            last_adjustment: None,
        }
    }
}

/// Best weight vector observed so far, kept as a recoverable snapshot.
/// Rolling back to it is an operational decision, never automatic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub weights: HashMap<String, f64>,
    pub composite_accuracy: f64,
    pub taken_at: DateTime<Utc>,
}

/// The committed weight vector plus bookkeeping. One store instance is owned
/// by the engine; writes are serialized by the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightStore {
    entries: Vec<StrategyWeight>,
    /// Fixed normalization target: the weight sum after every adjustment
    /// pass equals this.
    budget: f64,
    best: Option<WeightSnapshot>,
    pub(crate) last_pass: Option<DateTime<Utc>>,
}

impl WeightStore {
    /// Equal default weights (1.0 each); the budget is the strategy count.
    pub fn new(names: &[&str]) -> Self {
        Self {
            entries: names.iter().map(|n| StrategyWeight::new(n)).collect(),
            budget: names.len() as f64,
            best: None,
            last_pass: None,
        }
    }

    /// Rebuilds from persisted entries. Corrupt state (wrong cardinality,
    /// non-finite or non-positive weights) falls back to equal defaults
    /// rather than failing generation.
    pub fn from_persisted(names: &[&str], persisted: Vec<StrategyWeight>) -> Self {
        let mut store = Self::new(names);
        let usable = persisted.len() == names.len()
            && persisted
                .iter()
                .zip(names.iter())
                .all(|(w, n)| w.name == *n && w.current_weight.is_finite() && w.current_weight > 0.0);
        if usable {
            store.entries = persisted;
        } else {
            log::warn!(
                "persisted weight state unusable ({} entries for {} strategies); using equal defaults",
                persisted.len(),
                names.len()
            );
        }
        store
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn entries(&self) -> &[StrategyWeight] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [StrategyWeight] {
        &mut self.entries
    }

    pub fn weight_of(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|w| w.name == name)
            .map(|w| w.current_weight)
            .unwrap_or(1.0)
    }

    /// Snapshot of the committed vector, used by one generation cycle.
    pub fn vector(&self) -> HashMap<String, f64> {
        self.entries
            .iter()
            .map(|w| (w.name.clone(), w.current_weight))
            .collect()
    }

    pub fn weight_sum(&self) -> f64 {
        self.entries.iter().map(|w| w.current_weight).sum()
    }

    /// Appends a backtest accuracy to a strategy's rolling queue.
    pub fn record_accuracy(&mut self, name: &str, accuracy: f64, cap: usize) {
        if let Some(entry) = self.entries.iter_mut().find(|w| w.name == name) {
            entry.accuracy_history.push_back(accuracy);
            while entry.accuracy_history.len() > cap {
                entry.accuracy_history.pop_front();
            }
        }
    }

    /// Tracks the best composite accuracy seen, snapshotting the vector
    /// that produced it.
    pub fn record_composite(&mut self, accuracy: f64, now: DateTime<Utc>) {
        let improved = self
            .best
            .as_ref()
            .map_or(true, |b| accuracy > b.composite_accuracy);
        if improved {
            self.best = Some(WeightSnapshot {
                weights: self.vector(),
                composite_accuracy: accuracy,
                taken_at: now,
            });
        }
    }

    pub fn best_snapshot(&self) -> Option<&WeightSnapshot> {
        self.best.as_ref()
    }

    /// Scales all weights so their sum equals the budget. A degenerate sum
    /// resets to equal defaults.
    pub(crate) fn renormalize(&mut self) {
        let sum = self.weight_sum();
        if sum.is_finite() && sum > 0.0 {
            let factor = self.budget / sum;
            for entry in &mut self.entries {
                entry.current_weight *= factor;
            }
        } else {
            log::warn!("degenerate weight sum {}; resetting to equal weights", sum);
            for entry in &mut self.entries {
                entry.current_weight = 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn names() -> Vec<&'static str> {
        vec!["a", "b", "c"]
    }

    #[test]
    fn test_new_store_is_uniform() {
        let store = WeightStore::new(&names());
        assert_eq!(store.weight_of("a"), 1.0);
        assert!((store.weight_sum() - store.budget()).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_queue_is_bounded() {
        let mut store = WeightStore::new(&names());
        for i in 0..10 {
            store.record_accuracy("a", i as f64 / 10.0, 4);
        }
        let entry = &store.entries()[0];
        assert_eq!(entry.accuracy_history.len(), 4);
        assert_eq!(*entry.accuracy_history.back().unwrap(), 0.9);
    }

    #[test]
    fn test_corrupt_persisted_state_falls_back() {
        let mut bad = WeightStore::new(&names()).entries().to_vec();
        bad[1].current_weight = f64::NAN;
        let store = WeightStore::from_persisted(&names(), bad);
        assert_eq!(store.weight_of("b"), 1.0);
    }

    #[test]
    fn test_best_snapshot_only_improves() {
        let mut store = WeightStore::new(&names());
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        store.record_composite(0.5, t);
        store.record_composite(0.3, t);
        assert_eq!(store.best_snapshot().unwrap().composite_accuracy, 0.5);
        store.record_composite(0.7, t);
        assert_eq!(store.best_snapshot().unwrap().composite_accuracy, 0.7);
    }
}
