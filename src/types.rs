use crate::error::{DctaError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of candidates in the pool (1..=49).
pub const CANDIDATE_COUNT: usize = 49;

/// Regular numbers per draw; a draw additionally carries one special number.
pub const REGULAR_COUNT: usize = 6;

/// A lottery number in 1..=49.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Candidate(u8);

impl Candidate {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 49;

    pub fn new(n: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(DctaError::CandidateOutOfRange(n as u16))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates 1..=49 in ascending order.
    pub fn all() -> impl Iterator<Item = Candidate> {
        (Self::MIN..=Self::MAX).map(Candidate)
    }

    /// Zero-based index into a 49-slot table.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// One recorded lottery result: six regular numbers plus the special number.
/// Immutable once constructed; `Draw::new` is the only place malformed input
/// (wrong arity, out-of-range, duplicates) is surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    id: String,
    drawn_at: DateTime<Utc>,
    numbers: [Candidate; REGULAR_COUNT],
    special: Candidate,
}

impl Draw {
    /// Builds a draw from the raw seven-number open code, regular numbers
    /// first, special number last.
    pub fn new(id: impl Into<String>, drawn_at: DateTime<Utc>, open_code: &[u8]) -> Result<Self> {
        if open_code.len() != REGULAR_COUNT + 1 {
            return Err(DctaError::MalformedDraw(format!(
                "expected {} numbers, got {}",
                REGULAR_COUNT + 1,
                open_code.len()
            )));
        }
        let mut numbers = [Candidate(1); REGULAR_COUNT];
        for (slot, &raw) in numbers.iter_mut().zip(open_code.iter()) {
            *slot = Candidate::new(raw)
                .map_err(|_| DctaError::MalformedDraw(format!("number {} out of range", raw)))?;
        }
        let special = Candidate::new(open_code[REGULAR_COUNT]).map_err(|_| {
            DctaError::MalformedDraw(format!(
                "special number {} out of range",
                open_code[REGULAR_COUNT]
            ))
        })?;

        let mut seen = [false; CANDIDATE_COUNT];
        for c in numbers.iter().copied().chain(std::iter::once(special)) {
            if seen[c.index()] {
                return Err(DctaError::MalformedDraw(format!("duplicate number {}", c)));
            }
            seen[c.index()] = true;
        }

        Ok(Self {
            id: id.into(),
            drawn_at,
            numbers,
            special,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn drawn_at(&self) -> DateTime<Utc> {
        self.drawn_at
    }

    pub fn numbers(&self) -> &[Candidate; REGULAR_COUNT] {
        &self.numbers
    }

    pub fn special(&self) -> Candidate {
        self.special
    }

    /// All seven numbers, regular first, special last.
    pub fn all_numbers(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.numbers.iter().copied().chain(std::iter::once(self.special))
    }

    pub fn contains(&self, c: Candidate) -> bool {
        self.all_numbers().any(|n| n == c)
    }
}

/// Sparse candidate score table; an absent key means score zero.
pub type ScoreMap = HashMap<Candidate, f64>;

/// One entry of the composite ranking, with per-strategy contributions kept
/// for backtest attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub total: f64,
    pub contributions: HashMap<String, f64>,
}

/// How a recommendation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationSource {
    /// Full multi-strategy pipeline.
    Composite,
    /// History too short for analysis; frequency-ranked fallback.
    Fallback,
}

/// The structured output of one generation cycle. Immutable once returned;
/// presentation layers consume it as plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Exactly 18 distinct candidates, ascending.
    pub numbers: Vec<Candidate>,
    /// Top 6 zodiac groups.
    pub zodiacs: Vec<crate::attributes::Zodiac>,
    pub primary_wave: crate::attributes::Wave,
    pub secondary_wave: crate::attributes::Wave,
    /// Top head digits, at most 3.
    pub heads: Vec<u8>,
    /// Top tail digits, at most 5.
    pub tails: Vec<u8>,
    pub source: RecommendationSource,
    pub rationale: Option<String>,
}
