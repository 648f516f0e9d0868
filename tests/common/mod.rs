use chrono::{Duration, TimeZone, Utc};
use dcta::Draw;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[allow(dead_code)]
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Seeded pseudo-random history, most-recent-first. Deterministic for a
/// given seed, so tests built on it are reproducible.
#[allow(dead_code)]
pub fn random_history(len: usize, seed: u64) -> Vec<Draw> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap();
    let mut draws = Vec::with_capacity(len);
    for i in 0..len {
        let mut pool: Vec<u8> = (1..=49).collect();
        pool.shuffle(&mut rng);
        let code: Vec<u8> = pool[..7].to_vec();
        let draw = Draw::new(
            format!("{:07}", i + 1),
            base + Duration::days(i as i64),
            &code,
        )
        .unwrap();
        draws.push(draw);
    }
    draws.reverse();
    draws
}

/// History whose specials cycle 1, 2, 3 with +1 per draw (oldest first),
/// matching the transition-table scenario.
#[allow(dead_code)]
pub fn cycling_history(len: usize) -> Vec<Draw> {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 21, 30, 0).unwrap();
    let mut draws = Vec::with_capacity(len);
    for i in 0..len {
        let special = i % 49 + 1;
        let mut code: Vec<u8> = (1..=6u8)
            .map(|k| ((special + 7 * k as usize) % 49 + 1) as u8)
            .collect();
        code.push(special as u8);
        let draw = Draw::new(
            format!("{:07}", i + 1),
            base + Duration::days(i as i64),
            &code,
        )
        .unwrap();
        draws.push(draw);
    }
    draws.reverse();
    draws
}
