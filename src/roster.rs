// The full list of known players. A team generation run only sees the selected subset.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::MAX_NAME_LENGTH;
use crate::player::{Player, PlayerId, team_total};
use crate::rating::{MAX_RATING, MIN_RATING, RatingTier, is_valid_rating};


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RosterError {
    EmptyName,
    NameTooLong,
    DuplicateName(String),
    DuplicateId(PlayerId),
    InvalidRating,
    UnknownPlayer(PlayerId),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "Player name is required."),
            RosterError::NameTooLong => {
                write!(f, "Player name must be at most {MAX_NAME_LENGTH} characters.")
            }
            RosterError::DuplicateName(_) => write!(f, "That player is already in your pool."),
            RosterError::DuplicateId(id) => write!(f, "Player id {id} is used more than once."),
            RosterError::InvalidRating => {
                write!(f, "Rating must be between {MIN_RATING} and {MAX_RATING}.")
            }
            RosterError::UnknownPlayer(id) => write!(f, "No player with id {id}."),
        }
    }
}

impl std::error::Error for RosterError {}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SquadSummary {
    pub squad_size: usize,
    pub average_rating: f64,
    pub average_label: String,
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    selected: HashSet<PlayerId>,
}

fn normalize_name(name: &str) -> Result<String, RosterError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(RosterError::NameTooLong);
    }
    Ok(name.to_owned())
}

fn check_rating(rating: f64) -> Result<(), RosterError> {
    if is_valid_rating(rating) { Ok(()) } else { Err(RosterError::InvalidRating) }
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    // Builds a roster from stored players. Nobody is selected initially.
    pub fn from_players(players: impl IntoIterator<Item = Player>) -> Result<Self, RosterError> {
        let mut roster = Roster::new();
        for player in players {
            roster.insert(player)?;
        }
        Ok(roster)
    }

    pub fn players(&self) -> &[Player] { &self.players }
    pub fn len(&self) -> usize { self.players.len() }
    pub fn is_empty(&self) -> bool { self.players.is_empty() }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim().to_lowercase();
        self.players.iter().find(|p| p.name.to_lowercase() == name)
    }

    fn insert(&mut self, mut player: Player) -> Result<(), RosterError> {
        player.name = normalize_name(&player.name)?;
        check_rating(player.rating)?;
        if self.find_by_name(&player.name).is_some() {
            return Err(RosterError::DuplicateName(player.name));
        }
        if self.player(&player.id).is_some() {
            return Err(RosterError::DuplicateId(player.id));
        }
        self.players.push(player);
        Ok(())
    }

    // New players join the current selection right away.
    pub fn add_player(&mut self, name: &str, rating: f64) -> Result<PlayerId, RosterError> {
        let id = PlayerId::random();
        self.insert(Player::new(id.clone(), name.to_owned(), rating))?;
        self.selected.insert(id.clone());
        Ok(id)
    }

    pub fn update_rating(&mut self, id: &PlayerId, rating: f64) -> Result<(), RosterError> {
        check_rating(rating)?;
        let player = self
            .players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| RosterError::UnknownPlayer(id.clone()))?;
        player.rating = rating;
        Ok(())
    }

    pub fn is_selected(&self, id: &PlayerId) -> bool { self.selected.contains(id) }

    // Returns whether the player is selected afterwards.
    pub fn toggle_selection(&mut self, id: &PlayerId) -> Result<bool, RosterError> {
        if self.player(id).is_none() {
            return Err(RosterError::UnknownPlayer(id.clone()));
        }
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.clone());
            Ok(true)
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.players.iter().map(|p| p.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) { self.selected.clear(); }

    // Selected players in roster order.
    pub fn selected_pool(&self) -> Vec<Player> {
        self.players.iter().filter(|p| self.selected.contains(&p.id)).cloned().collect()
    }

    pub fn summary(&self) -> SquadSummary {
        let pool = self.selected_pool();
        let average_rating =
            if pool.is_empty() { 0.0 } else { team_total(&pool) / pool.len() as f64 };
        SquadSummary {
            squad_size: pool.len(),
            average_rating,
            average_label: RatingTier::closest(average_rating).label().to_owned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_pool;

    #[test]
    fn add_player_trims_and_selects() {
        let mut roster = Roster::new();
        let id = roster.add_player("  Alex ", 2.5).unwrap();
        assert_eq!(roster.player(&id).unwrap().name, "Alex");
        assert!(roster.is_selected(&id));
        assert_eq!(roster.selected_pool().len(), 1);
    }

    #[test]
    fn add_player_rejects_bad_input() {
        let mut roster = Roster::new();
        roster.add_player("Alex", 2.0).unwrap();
        assert_eq!(roster.add_player("   ", 1.0), Err(RosterError::EmptyName));
        assert_eq!(
            roster.add_player("aLEX", 1.0),
            Err(RosterError::DuplicateName("aLEX".to_owned()))
        );
        assert_eq!(roster.add_player("Sam", 3.5), Err(RosterError::InvalidRating));
        assert_eq!(roster.add_player(&"x".repeat(51), 1.0), Err(RosterError::NameTooLong));
        assert_eq!(roster.len(), 1);
        assert_eq!(
            roster.add_player("alex", 1.0).unwrap_err().to_string(),
            "That player is already in your pool."
        );
    }

    #[test]
    fn from_players_rejects_duplicates() {
        let mut players = sample_pool(&[1.0, 2.0]);
        players[1].id = players[0].id.clone();
        assert_eq!(
            Roster::from_players(players).unwrap_err(),
            RosterError::DuplicateId(PlayerId::from("p1"))
        );
    }

    #[test]
    fn selection_and_summary() {
        let mut roster = Roster::from_players(sample_pool(&[3.0, 2.0, 1.0, 0.0])).unwrap();
        assert_eq!(roster.summary().squad_size, 0);
        assert_eq!(roster.summary().average_rating, 0.0);

        roster.select_all();
        let summary = roster.summary();
        assert_eq!(summary.squad_size, 4);
        assert_eq!(summary.average_rating, 1.5);
        assert_eq!(summary.average_label, "Advanced");

        assert_eq!(roster.toggle_selection(&PlayerId::from("p1")), Ok(false));
        assert_eq!(roster.summary().average_rating, 1.0);
        assert_eq!(roster.toggle_selection(&PlayerId::from("p1")), Ok(true));
        assert!(roster.toggle_selection(&PlayerId::from("nobody")).is_err());

        let names: Vec<_> = roster.selected_pool().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie", "Dave"]);
    }

    #[test]
    fn rating_edits() {
        let mut roster = Roster::from_players(sample_pool(&[1.0])).unwrap();
        let id = PlayerId::from("p1");
        roster.update_rating(&id, 2.5).unwrap();
        assert_eq!(roster.player(&id).unwrap().rating, 2.5);
        assert_eq!(roster.update_rating(&id, -1.0), Err(RosterError::InvalidRating));
        assert_eq!(
            roster.update_rating(&PlayerId::from("p9"), 1.0),
            Err(RosterError::UnknownPlayer(PlayerId::from("p9")))
        );
    }
}
