use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};


pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 3.0;

// Skill tiers offered when adding a player. The balancing code never looks at tiers, only at
// the numeric rating, so any value in [MIN_RATING, MAX_RATING] is accepted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, Serialize, Deserialize)]
pub enum RatingTier {
    New,
    Casual,
    Advanced,
    Elite,
    Pro,
}

impl RatingTier {
    pub fn value(self) -> f64 {
        match self {
            RatingTier::New => 0.0,
            RatingTier::Casual => 1.0,
            RatingTier::Advanced => 2.0,
            RatingTier::Elite => 2.5,
            RatingTier::Pro => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RatingTier::New => "New",
            RatingTier::Casual => "Casual",
            RatingTier::Advanced => "Advanced",
            RatingTier::Elite => "Elite",
            RatingTier::Pro => "Pro",
        }
    }

    pub fn helper(self) -> &'static str {
        match self {
            RatingTier::New => "Learning the ropes",
            RatingTier::Casual => "Plays regularly for fun",
            RatingTier::Advanced => "Strong pickup contributor",
            RatingTier::Elite => "Between pro and advanced, consistently sharp",
            RatingTier::Pro => "High-level competitive experience",
        }
    }

    pub fn from_value(value: f64) -> Option<RatingTier> {
        RatingTier::iter().find(|tier| tier.value() == value)
    }

    // Nearest tier by value. When two tiers are equally close the higher one wins.
    pub fn closest(value: f64) -> RatingTier {
        let mut best = RatingTier::New;
        for tier in RatingTier::iter() {
            let best_delta = (best.value() - value).abs();
            let delta = (tier.value() - value).abs();
            if delta < best_delta || (delta == best_delta && tier.value() > best.value()) {
                best = tier;
            }
        }
        best
    }
}

pub fn is_valid_rating(rating: f64) -> bool { (MIN_RATING..=MAX_RATING).contains(&rating) }

pub fn rating_label(rating: f64) -> String {
    match RatingTier::from_value(rating) {
        Some(tier) => tier.label().to_owned(),
        None => format!("Level {rating}"),
    }
}
