// JSON shapes of the `/generate` endpoint and their conversion to and from core types.

use enum_map::enum_map;
use serde::{Deserialize, Serialize};

use crate::fairness::{Tally, pick_message};
use crate::lineup::Lineup;
use crate::partition::Partition;
use crate::player::{Player, PlayerId};
use crate::rating::{MAX_RATING, MIN_RATING, is_valid_rating};
use crate::side::Side;


pub const MIN_REQUEST_PLAYERS: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TeamRequest {
    pub players: Vec<Player>,
    #[serde(alias = "green_captain_id")]
    pub captain_a_id: PlayerId,
    #[serde(alias = "orange_captain_id")]
    pub captain_b_id: PlayerId,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
    pub total_a: f64,
    pub total_b: f64,
    pub gap: f64,
    // Older servers may omit the message; it is then derived from the gap.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl TeamRequest {
    pub fn new(players: Vec<Player>, captain_a_id: PlayerId, captain_b_id: PlayerId) -> Self {
        TeamRequest { players, captain_a_id, captain_b_id }
    }

    // Field-level checks. Captain checks belong to the partitioner and are not repeated here.
    pub fn validate(&self) -> Result<(), String> {
        if self.players.is_empty() {
            return Err("Players list must not be empty".to_owned());
        }
        if self.players.len() < MIN_REQUEST_PLAYERS {
            return Err(format!("At least {MIN_REQUEST_PLAYERS} players are required"));
        }
        for player in &self.players {
            let name_len = player.name.chars().count();
            if name_len == 0 || name_len > MAX_NAME_LENGTH {
                return Err(format!(
                    "Player name must be 1 to {MAX_NAME_LENGTH} characters long: '{}'",
                    player.name
                ));
            }
            if !is_valid_rating(player.rating) {
                return Err(format!(
                    "Rating of {} must be between {MIN_RATING} and {MAX_RATING}",
                    player.name
                ));
            }
        }
        Ok(())
    }
}

impl From<&Lineup> for TeamResponse {
    fn from(lineup: &Lineup) -> Self {
        TeamResponse {
            team_a: lineup.team(Side::A).to_vec(),
            team_b: lineup.team(Side::B).to_vec(),
            total_a: lineup.tally.total_a,
            total_b: lineup.tally.total_b,
            gap: lineup.tally.gap,
            message: Some(lineup.tally.verdict.clone()),
        }
    }
}

impl From<TeamResponse> for Lineup {
    fn from(response: TeamResponse) -> Self {
        let verdict = match response.message {
            Some(message) => message,
            None => pick_message(response.gap).to_owned(),
        };
        Lineup {
            partition: Partition {
                teams: enum_map! {
                    Side::A => response.team_a.clone(),
                    Side::B => response.team_b.clone(),
                },
            },
            tally: Tally {
                total_a: response.total_a,
                total_b: response.total_b,
                gap: response.gap,
                verdict,
            },
        }
    }
}
