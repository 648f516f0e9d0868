//! Numeric-structure strategies: symmetry pairs, modular cohorts, classic
//! integer sequences, and prime/composite balance.

use super::{ScoringContext, Strategy};
use crate::types::{Candidate, Draw, ScoreMap};

const FIBONACCI: &[u8] = &[1, 2, 3, 5, 8, 13, 21, 34];
const DOUBLING: &[u8] = &[1, 2, 4, 8, 16, 32];

fn add_score(scores: &mut ScoreMap, n: i16, amount: f64) {
    if (1..=49).contains(&n) {
        let c = Candidate::new(n as u8).expect("range-checked");
        *scores.entry(c).or_insert(0.0) += amount;
    }
}

/// Each number n in the latest draw promotes its mirror 50 - n.
pub struct SymmetryPair;

impl Strategy for SymmetryPair {
    fn name(&self) -> &'static str {
        "symmetry_pair"
    }

    fn min_history(&self) -> usize {
        1
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let mut scores = ScoreMap::new();
        for c in history[0].all_numbers() {
            add_score(&mut scores, 50 - c.get() as i16, 7.0);
        }
        scores
    }
}

/// Heat of the mod-7 residue cohorts over a recent window; members of the
/// hottest cohort get the bonus.
pub struct ModularCohort;

impl Strategy for ModularCohort {
    fn name(&self) -> &'static str {
        "modular_cohort"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.balance_window);
        let mut residue_counts = [0u32; 7];
        for draw in recent {
            for c in draw.all_numbers() {
                residue_counts[(c.get() % 7) as usize] += 1;
            }
        }
        // Hottest residue, smallest residue on ties.
        let hottest = (0..7)
            .max_by_key(|r| (residue_counts[*r], 7 - *r))
            .unwrap_or(0);

        Candidate::all()
            .filter(|c| (c.get() % 7) as usize == hottest)
            .map(|c| (c, 5.0))
            .collect()
    }
}

/// Membership bonuses for classic sequences, plus continuations of the
/// arithmetic and geometric chains implied by the latest specials.
pub struct SequenceMembership;

impl Strategy for SequenceMembership {
    fn name(&self) -> &'static str {
        "sequence_membership"
    }

    fn min_history(&self) -> usize {
        2
    }

    fn score(&self, history: &[Draw], _ctx: &ScoringContext) -> ScoreMap {
        let mut scores = ScoreMap::new();
        for &n in FIBONACCI {
            add_score(&mut scores, n as i16, 4.0);
        }
        for &n in DOUBLING {
            add_score(&mut scores, n as i16, 3.0);
        }

        let latest = history[0].special().get() as i16;
        let previous = history[1].special().get() as i16;
        // Arithmetic continuation of the last two specials.
        add_score(&mut scores, latest + (latest - previous), 6.0);
        // Geometric continuation (doubling) of the latest special.
        add_score(&mut scores, latest * 2, 3.0);
        scores
    }
}

/// Compares the drawn prime share over a window against the pool share
/// (15 of 49) and backs whichever side lags.
pub struct PrimeBalance;

impl PrimeBalance {
    const POOL_PRIME_SHARE: f64 = 15.0 / 49.0;
}

impl Strategy for PrimeBalance {
    fn name(&self) -> &'static str {
        "prime_balance"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.balance_window);
        let mut primes = 0u32;
        let mut total = 0u32;
        for draw in recent {
            for c in draw.all_numbers() {
                total += 1;
                if ctx.attrs.get(c).prime {
                    primes += 1;
                }
            }
        }
        if total == 0 {
            return ScoreMap::new();
        }

        let share = primes as f64 / total as f64;
        let mut scores = ScoreMap::new();
        if share < Self::POOL_PRIME_SHARE * 0.9 {
            for c in Candidate::all().filter(|c| ctx.attrs.get(*c).prime) {
                scores.insert(c, 5.0);
            }
        } else if share > Self::POOL_PRIME_SHARE * 1.1 {
            for c in Candidate::all().filter(|c| !ctx.attrs.get(*c).prime) {
                scores.insert(c, 5.0);
            }
        }
        scores
    }
}
