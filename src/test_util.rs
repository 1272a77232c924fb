// Test utilities shared by unit tests, integration tests and the console crate tests.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::player::{Player, PlayerId};


const SAMPLE_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy",
    "Mallory", "Niaj", "Olivia", "Peggy", "Rupert", "Sybil", "Trent", "Victor", "Walter",
    "Yvonne",
];

// In theory random tests verify statistical properties that should always hold, but let's fix
// the seed to avoid sporadic failures.
pub fn deterministic_rng() -> StdRng { StdRng::from_seed([0; 32]) }

// Players "p1", "p2", ... with the given ratings, in order.
pub fn sample_pool(ratings: &[f64]) -> Vec<Player> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| {
            let name = match SAMPLE_NAMES.get(i) {
                Some(name) => (*name).to_owned(),
                None => format!("Player {}", i + 1),
            };
            Player::new(PlayerId(format!("p{}", i + 1)), name, rating)
        })
        .collect()
}
