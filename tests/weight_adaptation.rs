mod common;

use chrono::{TimeZone, Utc};
use common::random_history;
use dcta::{AppConfig, Engine, StrategyWeight};

fn at_day(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 4, 0, 0).unwrap()
}

#[test]
fn test_weight_sum_stays_on_budget() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 4);
    // Several passes on separate days so the cooldown never blocks.
    for day in 1..=6 {
        engine.run_backtest_at(&history, 15, at_day(day * 2));
    }
    let state = engine.weight_state();
    let sum: f64 = state.iter().map(|w| w.current_weight).sum();
    assert!((sum - state.len() as f64).abs() < 1e-9);
}

#[test]
fn test_cooldown_limits_adjustment_passes() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 4);

    let first = engine.run_backtest_at(&history, 15, at_day(1));
    assert!(first.weight_outcome.unwrap().applied);

    // Same day: the pass is rate-limited even though the backtest ran.
    let second = engine.run_backtest_at(&history, 15, at_day(1));
    assert!(!second.weight_outcome.unwrap().applied);

    let third = engine.run_backtest_at(&history, 15, at_day(3));
    assert!(third.weight_outcome.unwrap().applied);
}

#[test]
fn test_best_snapshot_is_retained() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 4);
    let report = engine.run_backtest_at(&history, 15, at_day(1));

    let store = engine.weight_store();
    let store = store.read().unwrap();
    let best = store.best_snapshot().expect("snapshot after first backtest");
    assert_eq!(best.composite_accuracy, report.composite_accuracy);
    assert_eq!(best.weights.len(), engine.registry().len());
}

#[test]
fn test_weight_state_round_trips_through_serde() {
    let engine = Engine::new(AppConfig::default());
    let history = random_history(150, 4);
    engine.run_backtest_at(&history, 15, at_day(1));

    let state = engine.weight_state();
    let json = serde_json::to_string(&state).unwrap();
    let restored: Vec<StrategyWeight> = serde_json::from_str(&json).unwrap();

    let revived = Engine::with_persisted_weights(AppConfig::default(), restored);
    let a = engine.generate(&history);
    let b = revived.generate(&history);
    assert_eq!(a, b, "identical weight state must reproduce output");
}

#[test]
fn test_corrupt_persisted_weights_fall_back_to_defaults() {
    let engine = Engine::new(AppConfig::default());
    let mut state = engine.weight_state();
    state[0].current_weight = -3.0;

    let revived = Engine::with_persisted_weights(AppConfig::default(), state);
    let revived_state = revived.weight_state();
    assert!(revived_state.iter().all(|w| w.current_weight == 1.0));
}
