//! Category-resonance strategies: aggregate recent heat per attribute group
//! and reward (or, for the balance variant, counterweight) membership.

use super::{ScoringContext, Strategy};
use crate::attributes::{Element, Wave, Zodiac};
use crate::types::{Candidate, Draw, ScoreMap};
use std::collections::HashMap;

/// Ranks groups by appearance count, descending, with a deterministic
/// ascending-key tie-break.
fn ranked_groups<G: Copy + Ord + std::hash::Hash>(
    counts: &HashMap<G, u32>,
    all: &[G],
) -> Vec<(G, u32)> {
    let mut ranked: Vec<(G, u32)> = all
        .iter()
        .map(|g| (*g, counts.get(g).copied().unwrap_or(0)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

fn group_counts<G, F>(history: &[Draw], classify: F) -> HashMap<G, u32>
where
    G: Copy + Eq + std::hash::Hash,
    F: Fn(Candidate) -> G,
{
    let mut counts = HashMap::new();
    for draw in history {
        for c in draw.all_numbers() {
            *counts.entry(classify(c)).or_insert(0) += 1;
        }
    }
    counts
}

/// Rewards members of the three hottest zodiac groups, tiered.
pub struct ZodiacHeat;

impl Strategy for ZodiacHeat {
    fn name(&self) -> &'static str {
        "zodiac_heat"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.heat_window);
        let counts = group_counts(recent, |c| ctx.attrs.zodiac(c));
        let ranked = ranked_groups(&counts, &Zodiac::ALL);

        let mut scores = ScoreMap::new();
        for (tier, (zodiac, count)) in ranked.iter().take(3).enumerate() {
            if *count == 0 {
                continue;
            }
            let bonus = [10.0, 8.0, 6.0][tier];
            for c in Candidate::all().filter(|c| ctx.attrs.zodiac(*c) == *zodiac) {
                scores.insert(c, bonus);
            }
        }
        scores
    }
}

/// Balance-seeking variant: rewards the coldest zodiac group.
pub struct ZodiacBalance;

impl Strategy for ZodiacBalance {
    fn name(&self) -> &'static str {
        "zodiac_balance"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.heat_window);
        let counts = group_counts(recent, |c| ctx.attrs.zodiac(c));
        let ranked = ranked_groups(&counts, &Zodiac::ALL);

        // Coldest group, ascending-key tie-break on equal counts.
        let coldest = ranked
            .iter()
            .rev()
            .min_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(z, _)| *z);

        let mut scores = ScoreMap::new();
        if let Some(zodiac) = coldest {
            for c in Candidate::all().filter(|c| ctx.attrs.zodiac(*c) == zodiac) {
                scores.insert(c, 8.0);
            }
        }
        scores
    }
}

/// Rewards the hottest wave, with a smaller bonus for the runner-up.
pub struct WaveHeat;

impl Strategy for WaveHeat {
    fn name(&self) -> &'static str {
        "wave_heat"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.heat_window);
        let counts = group_counts(recent, |c| ctx.attrs.wave(c));
        let ranked = ranked_groups(&counts, &Wave::ALL);

        let mut scores = ScoreMap::new();
        for (tier, (wave, count)) in ranked.iter().take(2).enumerate() {
            if *count == 0 {
                continue;
            }
            let bonus = [8.0, 4.0][tier];
            for c in Candidate::all().filter(|c| ctx.attrs.wave(*c) == *wave) {
                scores.insert(c, bonus);
            }
        }
        scores
    }
}

/// Rewards the three hottest tail digits.
pub struct TailHeat;

impl Strategy for TailHeat {
    fn name(&self) -> &'static str {
        "tail_heat"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.heat_window);
        let tails: Vec<u8> = (0..=9).collect();
        let counts = group_counts(recent, |c| ctx.attrs.get(c).tail);
        let ranked = ranked_groups(&counts, &tails);

        let mut scores = ScoreMap::new();
        for (tail, count) in ranked.iter().take(3) {
            if *count == 0 {
                continue;
            }
            for c in Candidate::all().filter(|c| ctx.attrs.get(*c).tail == *tail) {
                scores.insert(c, 6.0);
            }
        }
        scores
    }
}

/// Rewards the hottest element group, with a smaller runner-up bonus.
pub struct ElementHeat;

impl Strategy for ElementHeat {
    fn name(&self) -> &'static str {
        "element_heat"
    }

    fn min_history(&self) -> usize {
        15
    }

    fn score(&self, history: &[Draw], ctx: &ScoringContext) -> ScoreMap {
        let recent = super::window(history, ctx.config.heat_window);
        let counts = group_counts(recent, |c| ctx.attrs.element(c));
        let ranked = ranked_groups(&counts, &Element::ALL);

        let mut scores = ScoreMap::new();
        for (tier, (element, count)) in ranked.iter().take(2).enumerate() {
            if *count == 0 {
                continue;
            }
            let bonus = [6.0, 3.0][tier];
            for c in Candidate::all().filter(|c| ctx.attrs.element(*c) == *element) {
                scores.insert(c, bonus);
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeRegistry;
    use crate::config::ScoringConfig;
    use crate::strategies::testutil::narrow_history;
    use crate::strategies::ScoringContext;

    #[test]
    fn test_zodiac_heat_rewards_hot_group_members() {
        let attrs = AttributeRegistry::new();
        let config = ScoringConfig::default();
        let ctx = ScoringContext {
            attrs: &attrs,
            config: &config,
        };
        // Tiger, Rabbit and Dragon each collect a constant regular number
        // plus a cycling special, putting them ahead of every other group.
        let history = narrow_history(30);
        let scores = ZodiacHeat.score(&history, &ctx);
        assert_eq!(scores[&Candidate::new(40).unwrap()], 10.0); // Tiger member
        assert!(scores.contains_key(&Candidate::new(39).unwrap())); // Rabbit
        assert!(!scores.contains_key(&Candidate::new(46).unwrap())); // Monkey is cold
    }

    #[test]
    fn test_zodiac_balance_rewards_cold_group() {
        let attrs = AttributeRegistry::new();
        let config = ScoringConfig::default();
        let ctx = ScoringContext {
            attrs: &attrs,
            config: &config,
        };
        let history = narrow_history(30);
        let scores = ZodiacBalance.score(&history, &ctx);
        // Exactly one zodiac group is rewarded.
        let groups: std::collections::HashSet<_> =
            scores.keys().map(|c| attrs.zodiac(*c)).collect();
        assert_eq!(groups.len(), 1);
        // Six groups tie for coldest (special-only, 3 hits each); the
        // ascending-key tie-break lands on Rat.
        assert!(groups.contains(&Zodiac::Rat));
    }

    #[test]
    fn test_wave_heat_is_tiered() {
        let attrs = AttributeRegistry::new();
        let config = ScoringConfig::default();
        let ctx = ScoringContext {
            attrs: &attrs,
            config: &config,
        };
        let history = narrow_history(30);
        let scores = WaveHeat.score(&history, &ctx);
        let mut bonuses: Vec<f64> = scores.values().copied().collect();
        bonuses.sort_by(|a, b| a.partial_cmp(b).unwrap());
        bonuses.dedup();
        assert_eq!(bonuses, vec![4.0, 8.0]);
    }
}
