//! Signal-processing strategies over appearance series: exponential decay
//! trend, entropy balance, logistic-map drift, and special-number
//! periodicity.

use super::{ScoringContext, Strategy};
use crate::types::{Candidate, Draw, ScoreMap, CANDIDATE_COUNT};

/// MACD(12, 26, 9) over each candidate's 0/1 appearance series, oldest to
/// newest, warmed up at the uniform appearance probability. A positive
/// histogram means the candidate is in an active phase.
pub struct DecayFrequency;

impl Strategy for DecayFrequency {
    fn name(&self) -> &'static str {
        "decay_frequency"
    }

    fn min_history(&self) -> usize {
        30
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let history = super::window(history, ctx.config.analysis_window);
        let k12 = 2.0 / 13.0;
        let k26 = 2.0 / 27.0;
        let k9 = 2.0 / 10.0;
        let warmup = 7.0 / CANDIDATE_COUNT as f64;

        let mut scores = ScoreMap::new();
        for c in Candidate::all() {
            let mut ema12 = warmup;
            let mut ema26 = warmup;
            let mut dea = 0.0;

            for draw in history.iter().rev() {
                let val = if draw.contains(c) { 1.0 } else { 0.0 };
                ema12 = val * k12 + ema12 * (1.0 - k12);
                ema26 = val * k26 + ema26 * (1.0 - k26);
                dea = (ema12 - ema26) * k9 + dea * (1.0 - k9);
            }

            let dif = ema12 - ema26;
            let macd = (dif - dea) * 2.0;
            let score = macd * 2000.0 + dif * 1000.0;
            if score.abs() > f64::EPSILON {
                scores.insert(c, score);
            }
        }
        scores
    }
}

/// Measures how evenly appearances spread over a window; the flatter the
/// distribution already is, the smaller the correction. Underrepresented
/// candidates get boosted proportionally to their deficit.
pub struct EntropyBalance;

impl Strategy for EntropyBalance {
    fn name(&self) -> &'static str {
        "entropy_balance"
    }

    fn min_history(&self) -> usize {
        20
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.balance_window);
        let counts = super::appearance_counts(recent);
        let total: u32 = counts.iter().sum();
        if total == 0 {
            return ScoreMap::new();
        }

        let entropy: f64 = counts
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total as f64;
                -p * p.ln()
            })
            .sum();
        let max_entropy = (CANDIDATE_COUNT as f64).ln();
        let imbalance = 1.0 - entropy / max_entropy;

        let mean = total as f64 / CANDIDATE_COUNT as f64;
        let mut scores = ScoreMap::new();
        for c in Candidate::all() {
            let deficit = mean - counts[c.index()] as f64;
            if deficit > 0.0 {
                scores.insert(c, deficit * (1.0 + imbalance) * 4.0);
            }
        }
        scores
    }
}

/// Iterates the logistic map on the normalized latest special and scores a
/// neighborhood of the mapped value. Chaotic but fully deterministic.
pub struct LogisticDrift;

impl LogisticDrift {
    const R: f64 = 3.7;
    const ITERATIONS: usize = 3;
}

impl Strategy for LogisticDrift {
    fn name(&self) -> &'static str {
        "logistic_drift"
    }

    fn min_history(&self) -> usize {
        1
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let mut x = history[0].special().get() as f64 / 50.0;
        for _ in 0..Self::ITERATIONS {
            x = Self::R * x * (1.0 - x);
        }
        let target = ((x * 49.0).round() as i16).clamp(1, 49);

        let mut scores = ScoreMap::new();
        for (offset, bonus) in [(0i16, 8.0), (-1, 5.0), (1, 5.0)] {
            let n = target + offset;
            if (1..=49).contains(&n) {
                scores.insert(Candidate::new(n as u8).expect("range-checked"), bonus);
            }
        }
        scores
    }
}

/// Coarse period scan over the special-number series: if the series repeats
/// with lag p, the value p draws back is the likeliest next special.
pub struct SpecialPeriodicity;

impl SpecialPeriodicity {
    const MAX_PERIOD: usize = 12;
    const SCAN_DEPTH: usize = 24;
    const MIN_MATCHES: u32 = 2;
}

impl Strategy for SpecialPeriodicity {
    fn name(&self) -> &'static str {
        "special_periodicity"
    }

    fn min_history(&self) -> usize {
        26
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let specials: Vec<u8> = history
            .iter()
            .take(Self::SCAN_DEPTH + Self::MAX_PERIOD)
            .map(|d| d.special().get())
            .collect();

        let mut best: Option<(u32, usize)> = None;
        for period in 2..=Self::MAX_PERIOD {
            let mut matches = 0u32;
            let mut compared = 0u32;
            for i in 0..Self::SCAN_DEPTH.min(specials.len().saturating_sub(period)) {
                compared += 1;
                if specials[i] == specials[i + period] {
                    matches += 1;
                }
            }
            if compared == 0 {
                continue;
            }
            // Strictly-better only, so the smallest qualifying period wins.
            if matches >= Self::MIN_MATCHES && best.map_or(true, |(m, _)| matches > m) {
                best = Some((matches, period));
            }
        }

        let mut scores = ScoreMap::new();
        if let Some((matches, period)) = best {
            // With lag p, the next value mirrors the one p draws ago.
            let predicted = Candidate::new(specials[period - 1]).expect("taken from a draw");
            scores.insert(predicted, 12.0 * matches as f64 / Self::SCAN_DEPTH as f64 + 6.0);
        }
        scores
    }
}
