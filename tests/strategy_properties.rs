mod common;

use chrono::{Duration, TimeZone, Utc};
use common::cycling_history;
use dcta::attributes::AttributeRegistry;
use dcta::config::ScoringConfig;
use dcta::strategies::omission::MeanGapOmission;
use dcta::strategies::transition::SpecialTransition;
use dcta::strategies::{ScoringContext, Strategy};
use dcta::{Candidate, Draw};

#[test]
fn test_transition_predicts_cycling_successor() {
    let attrs = AttributeRegistry::new();
    let config = ScoringConfig::default();
    let ctx = ScoringContext {
        attrs: &attrs,
        config: &config,
    };
    let history = cycling_history(80);
    let scores = SpecialTransition.evaluate(&history, &ctx);

    let last = history[0].special().get() as usize;
    let expected = Candidate::new(((last % 49) + 1) as u8).unwrap();
    let top = scores
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap().then(b.0.cmp(a.0)))
        .map(|(c, _)| *c)
        .unwrap();
    assert_eq!(top, expected);
}

#[test]
fn test_omission_outlier_beats_fresh_repeat() {
    let attrs = AttributeRegistry::new();
    let config = ScoringConfig::default();
    let ctx = ScoringContext {
        attrs: &attrs,
        config: &config,
    };

    // 60 draws over a confined pool: 49 never appears, 11 appears in all.
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap();
    let mut history: Vec<Draw> = (0..60)
        .map(|i| {
            let special = (i % 10 + 1) as u8;
            Draw::new(
                format!("{:07}", i + 1),
                base + Duration::days(i as i64),
                &[11, 12, 13, 14, 15, 16, special],
            )
            .unwrap()
        })
        .collect();
    history.reverse();

    let scores = MeanGapOmission.evaluate(&history, &ctx);
    let absent = Candidate::new(49).unwrap();
    let fresh = Candidate::new(11).unwrap();
    assert!(
        scores[&absent] > scores[&fresh],
        "maximal omission must outscore a just-appeared candidate"
    );
}

#[test]
fn test_strategies_never_mutate_history() {
    let attrs = AttributeRegistry::new();
    let config = ScoringConfig::default();
    let ctx = ScoringContext {
        attrs: &attrs,
        config: &config,
    };
    let history = cycling_history(80);
    let before = history.clone();
    for strategy in dcta::strategies::StrategyRegistry::new().all() {
        let _ = strategy.evaluate(&history, &ctx);
    }
    assert_eq!(history, before);
}
