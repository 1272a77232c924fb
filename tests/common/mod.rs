// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::HashSet;

use fairkick::partition::target_sizes;
use fairkick::{Partition, Player, PlayerId, Side};
use itertools::Itertools;
use rand::SeedableRng;
use rand::rngs::StdRng;


#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng { StdRng::seed_from_u64(seed) }

// Checks everything that must hold for any partition, regardless of ratings.
#[allow(dead_code)]
pub fn assert_valid_partition(
    pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId, partition: &Partition,
) {
    let all_ids = partition.teams.values().flatten().map(|p| p.id.clone()).collect_vec();
    assert_eq!(all_ids.len(), pool.len(), "{partition:?}");
    assert_eq!(
        all_ids.into_iter().collect::<HashSet<_>>(),
        pool.iter().map(|p| p.id.clone()).collect::<HashSet<_>>()
    );
    assert_eq!(partition.side_of(captain_a), Some(Side::A));
    assert_eq!(partition.side_of(captain_b), Some(Side::B));
    assert_eq!(partition.captain(Side::A).map(|p| &p.id), Some(captain_a));
    assert_eq!(partition.captain(Side::B).map(|p| &p.id), Some(captain_b));
    let targets = target_sizes(pool.len());
    assert_eq!(partition.team(Side::A).len(), targets[Side::A]);
    assert_eq!(partition.team(Side::B).len(), targets[Side::B]);
}
