// Greedy team builder.
//
// Captains are seeded first, then the rest of the pool ("bench") is walked once in random
// order. Each bench player goes to whichever side is currently weaker, unless one side has
// already reached its target size, in which case everyone left goes to the other side without
// looking at ratings. This single pass does not guarantee the minimum possible gap.

use enum_map::{EnumMap, enum_map};
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CaptainError, TeamError};
use crate::player::{Player, PlayerId, find_player, team_total};
use crate::side::Side;


#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Partition {
    pub teams: EnumMap<Side, Vec<Player>>,
}

impl Partition {
    pub fn team(&self, side: Side) -> &[Player] { &self.teams[side] }
    pub fn total(&self, side: Side) -> f64 { team_total(&self.teams[side]) }
    pub fn num_players(&self) -> usize { self.teams.values().map(Vec::len).sum() }

    pub fn side_of(&self, id: &PlayerId) -> Option<Side> {
        self.teams
            .iter()
            .find(|(_, players)| players.iter().any(|p| &p.id == id))
            .map(|(side, _)| side)
    }

    pub fn captain(&self, side: Side) -> Option<&Player> { self.teams[side].first() }
}

// Team A takes the extra player when the pool size is odd.
pub fn target_sizes(pool_size: usize) -> EnumMap<Side, usize> {
    enum_map! {
        Side::A => pool_size.div_ceil(2),
        Side::B => pool_size / 2,
    }
}

pub fn validate_pool<'a>(
    pool: &'a [Player], captain_a: &PlayerId, captain_b: &PlayerId,
) -> Result<EnumMap<Side, &'a Player>, TeamError> {
    if pool.is_empty() {
        return Err(TeamError::EmptyPool);
    }
    if let Some(id) = pool.iter().map(|p| &p.id).duplicates().next() {
        return Err(TeamError::DuplicatePlayer(id.clone()));
    }
    if captain_a == captain_b {
        return Err(TeamError::InvalidCaptains(CaptainError::Same));
    }
    let find_captain = |side, id| {
        find_player(pool, id).ok_or(TeamError::InvalidCaptains(CaptainError::NotInPool(side)))
    };
    let player_a = find_captain(Side::A, captain_a)?;
    let player_b = find_captain(Side::B, captain_b)?;
    Ok(enum_map! {
        Side::A => player_a,
        Side::B => player_b,
    })
}

fn pick_side(
    sizes: &EnumMap<Side, usize>, totals: &EnumMap<Side, f64>, targets: &EnumMap<Side, usize>,
    rng: &mut impl Rng,
) -> Side {
    if sizes[Side::A] >= targets[Side::A] {
        return Side::B;
    }
    if sizes[Side::B] >= targets[Side::B] {
        return Side::A;
    }
    if totals[Side::A] < totals[Side::B] {
        Side::A
    } else if totals[Side::B] < totals[Side::A] {
        Side::B
    } else if rng.random_bool(0.5) {
        Side::A
    } else {
        Side::B
    }
}

pub fn partition(
    pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId, rng: &mut impl Rng,
) -> Result<Partition, TeamError> {
    let captains = validate_pool(pool, captain_a, captain_b)?;

    let mut bench = pool
        .iter()
        .filter(|p| &p.id != captain_a && &p.id != captain_b)
        .collect_vec();
    bench.shuffle(rng);

    let targets = target_sizes(pool.len());
    let mut teams = enum_map! { side => vec![captains[side].clone()] };
    let mut totals = enum_map! { side => captains[side].rating };
    for player in bench {
        let sizes = enum_map! { side => teams[side].len() };
        let side = pick_side(&sizes, &totals, &targets, rng);
        totals[side] += player.rating;
        teams[side].push(player.clone());
    }
    Ok(Partition { teams })
}
