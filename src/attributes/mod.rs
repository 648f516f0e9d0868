//! Static attribute tables over the 1..=49 candidate pool.
//!
//! Every table is total: registry construction verifies coverage and panics
//! on a gap or overlap, since a missing mapping is a build defect rather
//! than a runtime condition.

use crate::types::{Candidate, CANDIDATE_COUNT};
use serde::{Deserialize, Serialize};

/// The twelve zodiac groups. Assignment follows the current-cycle alignment
/// where 1 belongs to Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    pub const ALL: [Zodiac; 12] = [
        Zodiac::Rat,
        Zodiac::Ox,
        Zodiac::Tiger,
        Zodiac::Rabbit,
        Zodiac::Dragon,
        Zodiac::Snake,
        Zodiac::Horse,
        Zodiac::Goat,
        Zodiac::Monkey,
        Zodiac::Rooster,
        Zodiac::Dog,
        Zodiac::Pig,
    ];
}

/// Wave (color) groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Wave {
    Red,
    Blue,
    Green,
}

impl Wave {
    pub const ALL: [Wave; 3] = [Wave::Red, Wave::Blue, Wave::Green];
}

/// Five-element groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];
}

const ZODIAC_TABLE: [(Zodiac, &[u8]); 12] = [
    (Zodiac::Snake, &[1, 13, 25, 37, 49]),
    (Zodiac::Horse, &[12, 24, 36, 48]),
    (Zodiac::Goat, &[11, 23, 35, 47]),
    (Zodiac::Monkey, &[10, 22, 34, 46]),
    (Zodiac::Rooster, &[9, 21, 33, 45]),
    (Zodiac::Dog, &[8, 20, 32, 44]),
    (Zodiac::Pig, &[7, 19, 31, 43]),
    (Zodiac::Rat, &[6, 18, 30, 42]),
    (Zodiac::Ox, &[5, 17, 29, 41]),
    (Zodiac::Tiger, &[4, 16, 28, 40]),
    (Zodiac::Rabbit, &[3, 15, 27, 39]),
    (Zodiac::Dragon, &[2, 14, 26, 38]),
];

const WAVE_TABLE: [(Wave, &[u8]); 3] = [
    (
        Wave::Red,
        &[1, 2, 7, 8, 12, 13, 18, 19, 23, 24, 29, 30, 34, 35, 40, 45, 46],
    ),
    (
        Wave::Blue,
        &[3, 4, 9, 10, 14, 15, 20, 25, 26, 31, 36, 37, 41, 42, 47, 48],
    ),
    (
        Wave::Green,
        &[5, 6, 11, 16, 17, 21, 22, 27, 28, 32, 33, 38, 39, 43, 44, 49],
    ),
];

const ELEMENT_TABLE: [(Element, &[u8]); 5] = [
    (Element::Metal, &[3, 4, 11, 12, 25, 26, 33, 34, 41, 42, 49]),
    (Element::Wood, &[7, 8, 15, 16, 23, 24, 37, 38, 45, 46]),
    (Element::Water, &[13, 14, 21, 22, 29, 30, 43, 44]),
    (Element::Fire, &[1, 2, 9, 10, 17, 18, 31, 32, 39, 40, 47, 48]),
    (Element::Earth, &[5, 6, 19, 20, 27, 28, 35, 36]),
];

const PRIMES: &[u8] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

/// Precomputed per-candidate attribute record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    pub zodiac: Zodiac,
    pub wave: Wave,
    pub element: Element,
    /// Contiguous 7-band cluster, `(n-1)/7`.
    pub cluster: u8,
    /// Position on the 7x7 board: `((n-1)/7, (n-1)%7)`.
    pub grid: (u8, u8),
    pub head: u8,
    pub tail: u8,
    pub odd: bool,
    pub prime: bool,
}

/// Total candidate→attribute lookup, built once per process.
#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    by_candidate: [CandidateAttributes; CANDIDATE_COUNT],
}

impl AttributeRegistry {
    /// Builds the registry from the static tables.
    ///
    /// Panics if any table leaves a candidate unmapped or maps one twice;
    /// that is a construction-time defect and must fail loudly.
    pub fn new() -> Self {
        let zodiac = Self::invert("zodiac", &ZODIAC_TABLE);
        let wave = Self::invert("wave", &WAVE_TABLE);
        let element = Self::invert("element", &ELEMENT_TABLE);

        let by_candidate = std::array::from_fn(|i| {
            let n = (i + 1) as u8;
            CandidateAttributes {
                zodiac: zodiac[i],
                wave: wave[i],
                element: element[i],
                cluster: (n - 1) / 7,
                grid: ((n - 1) / 7, (n - 1) % 7),
                head: n / 10,
                tail: n % 10,
                odd: n % 2 == 1,
                prime: PRIMES.contains(&n),
            }
        });

        Self { by_candidate }
    }

    fn invert<G: Copy + std::fmt::Debug>(
        table_name: &str,
        table: &[(G, &[u8])],
    ) -> [G; CANDIDATE_COUNT] {
        let mut slots: [Option<G>; CANDIDATE_COUNT] = [None; CANDIDATE_COUNT];
        for (group, members) in table {
            for &n in *members {
                let idx = (n - 1) as usize;
                assert!(
                    slots[idx].is_none(),
                    "{} table maps {} twice ({:?})",
                    table_name,
                    n,
                    group
                );
                slots[idx] = Some(*group);
            }
        }
        std::array::from_fn(|i| {
            slots[i].unwrap_or_else(|| panic!("{} table leaves {} unmapped", table_name, i + 1))
        })
    }

    pub fn get(&self, c: Candidate) -> &CandidateAttributes {
        &self.by_candidate[c.index()]
    }

    pub fn zodiac(&self, c: Candidate) -> Zodiac {
        self.by_candidate[c.index()].zodiac
    }

    pub fn wave(&self, c: Candidate) -> Wave {
        self.by_candidate[c.index()].wave
    }

    pub fn element(&self, c: Candidate) -> Element {
        self.by_candidate[c.index()].element
    }

    /// Members of a zodiac group, ascending.
    pub fn zodiac_members(&self, z: Zodiac) -> Vec<Candidate> {
        Candidate::all().filter(|c| self.zodiac(*c) == z).collect()
    }

    pub fn wave_members(&self, w: Wave) -> Vec<Candidate> {
        Candidate::all().filter(|c| self.wave(*c) == w).collect()
    }

    pub fn element_members(&self, e: Element) -> Vec<Candidate> {
        Candidate::all().filter(|c| self.element(*c) == e).collect()
    }
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
