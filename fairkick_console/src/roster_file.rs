// Roster files: a YAML (or JSON) list of players. Ids are optional and generated when missing.

use anyhow::Context;
use fairkick::player::{Player, PlayerId};
use fairkick::rating::RatingTier;
use fairkick::roster::Roster;
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Tier(RatingTier),
    Value(f64),
}

impl RatingInput {
    pub fn value(self) -> f64 {
        match self {
            RatingInput::Tier(tier) => tier.value(),
            RatingInput::Value(value) => value,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub id: Option<PlayerId>,
    pub name: String,
    pub rating: RatingInput,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RosterFile {
    pub players: Vec<RosterEntry>,
}

pub fn parse_roster(contents: &str) -> anyhow::Result<Roster> {
    let file: RosterFile = serde_yaml::from_str(contents)?;
    let players = file.players.into_iter().map(|entry| {
        Player::new(entry.id.unwrap_or_else(PlayerId::random), entry.name, entry.rating.value())
    });
    Ok(Roster::from_players(players)?)
}

pub fn load_roster(filename: &str) -> anyhow::Result<Roster> {
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Failed to read roster file '{filename}'."))?;
    parse_roster(&contents).with_context(|| format!("Invalid roster file '{filename}'."))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_roster() {
        let roster = parse_roster(include_str!("../samples/roster.yaml")).unwrap();
        assert_eq!(roster.len(), 6);
        let alex = roster.player(&PlayerId::from("p1")).unwrap();
        assert_eq!(alex.name, "Alex");
        assert_eq!(alex.rating, 3.0);
        assert_eq!(roster.find_by_name("sam").unwrap().rating, 2.5);
        assert_eq!(roster.find_by_name("Kim").unwrap().rating, 0.0);
        // Generated ids are unique.
        assert_ne!(roster.find_by_name("Sam").unwrap().id, roster.find_by_name("Kim").unwrap().id);
    }

    #[test]
    fn json_roster() {
        let roster = parse_roster(
            r#"{"players": [{"id": "a", "name": "Ann", "rating": 1}, {"name": "Ben", "rating": "Elite"}]}"#,
        )
        .unwrap();
        assert_eq!(roster.find_by_name("Ben").unwrap().rating, 2.5);
        assert_eq!(roster.player(&PlayerId::from("a")).unwrap().rating, 1.0);
    }

    #[test]
    fn invalid_rosters() {
        let duplicate = "players:\n  - {name: Ann, rating: 1}\n  - {name: ann, rating: 2}\n";
        let err = parse_roster(duplicate).unwrap_err();
        assert_eq!(err.to_string(), "That player is already in your pool.");

        let bad_rating = "players:\n  - {name: Ann, rating: 7}\n";
        assert!(parse_roster(bad_rating).is_err());

        let bad_tier = "players:\n  - {name: Ann, rating: Legend}\n";
        assert!(parse_roster(bad_tier).is_err());
    }
}
