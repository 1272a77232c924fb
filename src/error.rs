use std::fmt;

use crate::player::PlayerId;
use crate::side::Side;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CaptainError {
    Same,
    NotInPool(Side),
}

// Input validation errors. All of them are detected before any randomness is consumed, so a
// failed request never yields a partial assignment.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TeamError {
    EmptyPool,
    InvalidCaptains(CaptainError),
    DuplicatePlayer(PlayerId),
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::EmptyPool => write!(f, "Players list must not be empty"),
            TeamError::InvalidCaptains(CaptainError::Same) => {
                write!(f, "Captains must be different players")
            }
            TeamError::InvalidCaptains(CaptainError::NotInPool(_)) => {
                write!(f, "Captains must exist in provided players")
            }
            TeamError::DuplicatePlayer(id) => write!(f, "Player {id} appears more than once"),
        }
    }
}

impl std::error::Error for TeamError {}
