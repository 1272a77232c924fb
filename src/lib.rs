#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod api;
pub mod draft;
pub mod error;
pub mod fairness;
pub mod generator;
pub mod lineup;
pub mod partition;
pub mod player;
pub mod rating;
pub mod roster;
pub mod side;
pub mod test_util;

pub use error::{CaptainError, TeamError};
pub use fairness::{Tally, classify};
pub use generator::{GenerateError, LocalGenerator, TeamGenerator};
pub use lineup::{Lineup, MIN_PLAYERS_REQUIRED};
pub use partition::{Partition, partition};
pub use player::{Player, PlayerId};
pub use side::Side;
