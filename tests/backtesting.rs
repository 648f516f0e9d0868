mod common;

use chrono::{TimeZone, Utc};
use common::random_history;
use dcta::{AppConfig, Engine};

fn at_day(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 4, 0, 0).unwrap()
}

#[test]
fn test_backtest_full_window() {
    common::init_test_logging();
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 21);
    let report = engine.run_backtest_at(&history, 20, at_day(1));

    assert_eq!(report.window_requested, 20);
    assert_eq!(report.replayed, 20);
    assert_eq!(report.skipped, 0);
    assert!(report.composite_accuracy >= 0.0 && report.composite_accuracy <= 1.0);
    assert_eq!(report.per_strategy.len(), engine.registry().len());
    for s in &report.per_strategy {
        assert!(s.accuracy >= 0.0 && s.accuracy <= 1.0);
        assert!(s.hits <= s.evaluated);
    }
    assert!(report.weight_outcome.is_some());
}

#[test]
fn test_backtest_skips_thin_training_slices() {
    let engine = Engine::new(AppConfig::default());
    // 60 draws: replay index i trains on 59 - i draws, so only the first
    // 10 points meet the 50-draw floor.
    let history = random_history(60, 21);
    let report = engine.run_backtest_at(&history, 30, at_day(1));
    assert_eq!(report.replayed, 10);
    assert_eq!(report.skipped, 20);
}

#[test]
fn test_backtest_with_no_usable_points_commits_nothing() {
    let engine = Engine::new(AppConfig::default());
    let before = engine.weight_state();
    let history = random_history(40, 21);
    let report = engine.run_backtest_at(&history, 30, at_day(1));

    assert_eq!(report.replayed, 0);
    assert!(report.weight_outcome.is_none());
    let after = engine.weight_state();
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.current_weight, a.current_weight);
        assert_eq!(b.accuracy_history, a.accuracy_history);
    }
}

#[test]
fn test_backtest_is_deterministic() {
    let history = random_history(150, 33);
    let a = Engine::new(AppConfig::default()).run_backtest_at(&history, 15, at_day(1));
    let b = Engine::new(AppConfig::default()).run_backtest_at(&history, 15, at_day(1));
    assert_eq!(a.composite_accuracy, b.composite_accuracy);
    assert_eq!(a.composite_hits, b.composite_hits);
    for (ra, rb) in a.per_strategy.iter().zip(b.per_strategy.iter()) {
        assert_eq!(ra.name, rb.name);
        assert_eq!(ra.hits, rb.hits);
    }
}

#[test]
fn test_backtest_records_accuracies() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 8);
    engine.run_backtest_at(&history, 20, at_day(1));

    let state = engine.weight_state();
    // Every strategy that produced predictions has one recorded accuracy.
    assert!(state.iter().any(|w| w.accuracy_history.len() == 1));
}

#[test]
fn test_result_log_is_bounded_and_attributed() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(160, 13);
    let report = engine.run_backtest_at(&history, 25, at_day(1));

    let config = AppConfig::default();
    assert!(report.results.len() <= config.backtesting.max_result_log);
    for result in &report.results {
        assert_eq!(
            result.predicted_top_k.len(),
            config.backtesting.composite_top_k
        );
        assert_eq!(result.actual.len(), 7);
        // Contributions exist only when something hit.
        if result.hit_count == 0 {
            assert!(result.per_strategy_contribution.is_empty());
        }
    }
}
