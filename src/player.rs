use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};


#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn random() -> Self { PlayerId(uuid::Uuid::new_v4().to_string()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self { PlayerId(id.to_owned()) }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

// Players are value records: nothing mutates them while teams are being built.
#[derive(Clone, PartialEq, Debug, new, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub rating: f64,
}

pub fn team_total<'a>(players: impl IntoIterator<Item = &'a Player>) -> f64 {
    players.into_iter().map(|p| p.rating).sum()
}

pub fn find_player<'a>(pool: &'a [Player], id: &PlayerId) -> Option<&'a Player> {
    pool.iter().find(|p| &p.id == id)
}
