use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TeamError;
use crate::fairness::{Tally, classify};
use crate::partition::{Partition, partition};
use crate::player::{Player, PlayerId};
use crate::side::Side;


// Callers refuse to build a match with fewer players than this. The partitioner itself works
// for any pool that contains both captains.
pub const MIN_PLAYERS_REQUIRED: usize = 4;

// Result of one team generation run. Recreated from scratch on every run.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Lineup {
    pub partition: Partition,
    pub tally: Tally,
}

impl Lineup {
    pub fn generate(
        pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId, rng: &mut impl Rng,
    ) -> Result<Self, TeamError> {
        let partition = partition(pool, captain_a, captain_b, rng)?;
        let tally = classify(partition.total(Side::A), partition.total(Side::B));
        debug!(
            "Split {} players: {} vs {} (gap {})",
            pool.len(),
            tally.total_a,
            tally.total_b,
            tally.gap
        );
        Ok(Lineup { partition, tally })
    }

    pub fn team(&self, side: Side) -> &[Player] { self.partition.team(side) }
}
