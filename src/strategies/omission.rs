//! Gap/omission strategies: how long since each candidate last appeared,
//! relative to its own historical gap distribution.

use super::{ScoringContext, Strategy};
use crate::types::{Candidate, Draw, ScoreMap, CANDIDATE_COUNT};

/// Expected gap for a 7-of-49 draw, used when a candidate has no observed
/// gap history.
const EXPECTED_GAP: f64 = 49.0 / 7.0;

/// Per-candidate gap statistics over a chronological pass.
struct OmissionStats {
    /// Completed gaps (draws skipped between consecutive appearances).
    gaps: Vec<Vec<u32>>,
    /// Draws since the latest appearance; equals the slice length for a
    /// candidate never seen in it.
    current: [u32; CANDIDATE_COUNT],
}

fn omission_stats(history: &[Draw]) -> OmissionStats {
    let len = history.len();
    let mut gaps = vec![Vec::new(); CANDIDATE_COUNT];
    let mut last_seen = [None::<usize>; CANDIDATE_COUNT];

    // Oldest to newest.
    for (idx, draw) in history.iter().rev().enumerate() {
        for c in draw.all_numbers() {
            let i = c.index();
            let prior = last_seen[i].map(|p| p as i64).unwrap_or(-1);
            gaps[i].push((idx as i64 - prior - 1) as u32);
            last_seen[i] = Some(idx);
        }
    }

    let mut current = [0u32; CANDIDATE_COUNT];
    for i in 0..CANDIDATE_COUNT {
        current[i] = match last_seen[i] {
            Some(idx) => (len - 1 - idx) as u32,
            None => len as u32,
        };
    }

    OmissionStats { gaps, current }
}

fn mean_std(values: &[u32]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().map(|v| *v as f64).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| (*v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

/// Banded omission scoring: inertia for a repeat, a "due" band around the
/// mean gap, and an "overdue" band for deep outliers.
pub struct MeanGapOmission;

impl MeanGapOmission {
    const INERTIA: f64 = 15.0;
    const DUE: f64 = 20.0;
    const OVERDUE: f64 = 35.0;
    const NEUTRAL: f64 = 5.0;
    /// Absolute omission beyond which a candidate counts as overdue no
    /// matter what its gap history looks like (~6x the expected gap).
    const OVERDUE_FLOOR: u32 = 45;
}

impl Strategy for MeanGapOmission {
    fn name(&self) -> &'static str {
        "mean_gap_omission"
    }

    fn min_history(&self) -> usize {
        20
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let history = super::window(history, ctx.config.analysis_window);
        let stats = omission_stats(history);

        let mut scores = ScoreMap::new();
        for c in Candidate::all() {
            let i = c.index();
            let current = stats.current[i];
            let gaps = &stats.gaps[i];

            let score = if current == 0 {
                Self::INERTIA
            } else if gaps.is_empty() || current >= Self::OVERDUE_FLOOR {
                // Never seen in the window, or absolute deep outlier.
                Self::OVERDUE
            } else {
                let (mean, std) = mean_std(gaps);
                let z = (current as f64 - mean) / std.max(1.0);
                let max_gap = *gaps.iter().max().unwrap_or(&0);
                if z >= 2.0 || current > max_gap {
                    Self::OVERDUE
                } else if z.abs() < 0.5 {
                    Self::DUE
                } else {
                    Self::NEUTRAL
                }
            };
            scores.insert(c, score);
        }
        scores
    }
}

/// Linear omission pressure: current gap over mean gap.
pub struct OmissionPressure;

impl Strategy for OmissionPressure {
    fn name(&self) -> &'static str {
        "omission_pressure"
    }

    fn min_history(&self) -> usize {
        10
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let history = super::window(history, ctx.config.analysis_window);
        let stats = omission_stats(history);

        let mut scores = ScoreMap::new();
        for c in Candidate::all() {
            let i = c.index();
            let mean = if stats.gaps[i].len() >= 2 {
                mean_std(&stats.gaps[i]).0.max(1.0)
            } else {
                EXPECTED_GAP
            };
            let pressure = stats.current[i] as f64 / mean;
            if pressure > 0.0 {
                scores.insert(c, pressure * 10.0);
            }
        }
        scores
    }
}

/// Inertia variant: raw appearance counts over a short recent window.
pub struct RecentHot;

impl Strategy for RecentHot {
    fn name(&self) -> &'static str {
        "recent_hot"
    }

    fn min_history(&self) -> usize {
        10
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.hot_window);
        let counts = super::appearance_counts(recent);
        Candidate::all()
            .filter(|c| counts[c.index()] > 0)
            .map(|c| (c, counts[c.index()] as f64 * 6.0))
            .collect()
    }
}
