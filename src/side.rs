use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


// Side A is the one that absorbs the extra player when the pool size is odd.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn display_name(self) -> &'static str {
        match self {
            Side::A => "Blue",
            Side::B => "Orange",
        }
    }
}
