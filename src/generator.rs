use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::TeamError;
use crate::lineup::Lineup;
use crate::player::{Player, PlayerId};


#[derive(Clone, PartialEq, Debug)]
pub enum GenerateError {
    // Input rejected by the local algorithm.
    Invalid(TeamError),
    // Input rejected by a remote generator. Carries the server-provided detail.
    Rejected(String),
    // Remote generator could not be reached or returned garbage.
    Unavailable(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Invalid(err) => write!(f, "{err}"),
            GenerateError::Rejected(detail) => write!(f, "{detail}"),
            GenerateError::Unavailable(reason) => write!(f, "Team generator unavailable: {reason}"),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<TeamError> for GenerateError {
    fn from(err: TeamError) -> Self { GenerateError::Invalid(err) }
}

// Anything that can turn a pool and two captains into a lineup. Callers pick an
// implementation once (from configuration) and never branch on which one they hold.
#[async_trait]
pub trait TeamGenerator: Send + Sync {
    async fn generate(
        &self, pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId,
    ) -> Result<Lineup, GenerateError>;
}

pub struct LocalGenerator {
    // None means a fresh thread-local generator for every run.
    seeded_rng: Option<Mutex<StdRng>>,
}

impl LocalGenerator {
    pub fn new() -> Self { LocalGenerator { seeded_rng: None } }

    pub fn seeded(seed: u64) -> Self {
        LocalGenerator {
            seeded_rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    pub fn generate_now(
        &self, pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId,
    ) -> Result<Lineup, TeamError> {
        match &self.seeded_rng {
            Some(rng) => {
                // A poisoned lock still holds a usable generator state.
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                Lineup::generate(pool, captain_a, captain_b, &mut *rng)
            }
            None => Lineup::generate(pool, captain_a, captain_b, &mut rand::rng()),
        }
    }
}

#[async_trait]
impl TeamGenerator for LocalGenerator {
    async fn generate(
        &self, pool: &[Player], captain_a: &PlayerId, captain_b: &PlayerId,
    ) -> Result<Lineup, GenerateError> {
        Ok(self.generate_now(pool, captain_a, captain_b)?)
    }
}
