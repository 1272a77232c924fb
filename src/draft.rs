// Guided team draft: pick players, pick captains, generate, look at the results, regenerate.
//
// Every transition is checked here so that the generator only ever sees a selection with
// enough players and two distinct selected captains.

use std::fmt;

use enum_map::EnumMap;
use log::{info, warn};
use strum::IntoEnumIterator;

use crate::generator::{GenerateError, TeamGenerator};
use crate::lineup::{Lineup, MIN_PLAYERS_REQUIRED};
use crate::player::PlayerId;
use crate::roster::{Roster, RosterError};
use crate::side::Side;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftStep {
    Players,
    Captains,
    Generate,
    Results,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DraftError {
    WrongStep(DraftStep),
    NotEnoughPlayers { selected: usize },
    CaptainMissing,
    SameCaptains,
    CaptainNotSelected(PlayerId),
    Roster(RosterError),
    Generate(GenerateError),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::WrongStep(step) => write!(f, "Not available at step {step:?}."),
            DraftError::NotEnoughPlayers { selected } => write!(
                f,
                "Select at least {MIN_PLAYERS_REQUIRED} players to continue ({selected} selected)."
            ),
            DraftError::CaptainMissing => write!(f, "Select a captain for each team to continue."),
            DraftError::SameCaptains => write!(f, "Pick different captains for each side."),
            DraftError::CaptainNotSelected(_) => {
                write!(f, "Captains must be part of the player pool.")
            }
            DraftError::Roster(err) => write!(f, "{err}"),
            DraftError::Generate(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DraftError {}

impl From<RosterError> for DraftError {
    fn from(err: RosterError) -> Self { DraftError::Roster(err) }
}

pub struct Draft {
    roster: Roster,
    step: DraftStep,
    captains: EnumMap<Side, Option<PlayerId>>,
    lineup: Option<Lineup>,
}

impl Draft {
    pub fn new(roster: Roster) -> Self {
        Draft {
            roster,
            step: DraftStep::Players,
            captains: EnumMap::default(),
            lineup: None,
        }
    }

    pub fn step(&self) -> DraftStep { self.step }
    pub fn roster(&self) -> &Roster { &self.roster }
    pub fn captain(&self, side: Side) -> Option<&PlayerId> { self.captains[side].as_ref() }
    pub fn lineup(&self) -> Option<&Lineup> { self.lineup.as_ref() }

    fn expect_step(&self, allowed: &[DraftStep]) -> Result<(), DraftError> {
        if allowed.contains(&self.step) { Ok(()) } else { Err(DraftError::WrongStep(self.step)) }
    }

    pub fn add_player(&mut self, name: &str, rating: f64) -> Result<PlayerId, DraftError> {
        self.expect_step(&[DraftStep::Players])?;
        let id = self.roster.add_player(name, rating)?;
        self.lineup = None;
        Ok(id)
    }

    pub fn update_rating(&mut self, id: &PlayerId, rating: f64) -> Result<(), DraftError> {
        self.expect_step(&[DraftStep::Players])?;
        self.roster.update_rating(id, rating)?;
        Ok(())
    }

    // Deselecting a captain also drops them as captain. Any change invalidates the last lineup.
    pub fn toggle_player(&mut self, id: &PlayerId) -> Result<bool, DraftError> {
        self.expect_step(&[DraftStep::Players])?;
        let selected = self.roster.toggle_selection(id)?;
        if !selected {
            for side in Side::iter() {
                if self.captains[side].as_ref() == Some(id) {
                    self.captains[side] = None;
                }
            }
        }
        self.lineup = None;
        Ok(selected)
    }

    pub fn select_all(&mut self) -> Result<(), DraftError> {
        self.expect_step(&[DraftStep::Players])?;
        self.roster.select_all();
        self.lineup = None;
        Ok(())
    }

    pub fn confirm_players(&mut self) -> Result<(), DraftError> {
        self.expect_step(&[DraftStep::Players])?;
        let selected = self.roster.selected_pool().len();
        if selected < MIN_PLAYERS_REQUIRED {
            return Err(DraftError::NotEnoughPlayers { selected });
        }
        self.step = DraftStep::Captains;
        Ok(())
    }

    pub fn set_captain(&mut self, side: Side, id: &PlayerId) -> Result<(), DraftError> {
        self.expect_step(&[DraftStep::Captains])?;
        if !self.roster.is_selected(id) {
            return Err(DraftError::CaptainNotSelected(id.clone()));
        }
        self.captains[side] = Some(id.clone());
        self.lineup = None;
        Ok(())
    }

    pub fn confirm_captains(&mut self) -> Result<(), DraftError> {
        self.expect_step(&[DraftStep::Captains])?;
        let (Some(a), Some(b)) = (&self.captains[Side::A], &self.captains[Side::B]) else {
            return Err(DraftError::CaptainMissing);
        };
        if a == b {
            return Err(DraftError::SameCaptains);
        }
        self.step = DraftStep::Generate;
        Ok(())
    }

    // Also serves as "regenerate" from the results step. On failure the draft stays where it
    // was and the previous lineup is kept.
    pub async fn generate(
        &mut self, generator: &dyn TeamGenerator,
    ) -> Result<&Lineup, DraftError> {
        self.expect_step(&[DraftStep::Generate, DraftStep::Results])?;
        let (Some(a), Some(b)) = (&self.captains[Side::A], &self.captains[Side::B]) else {
            return Err(DraftError::CaptainMissing);
        };
        let pool = self.roster.selected_pool();
        match generator.generate(&pool, a, b).await {
            Ok(lineup) => {
                info!("Generated teams for {} players, gap {}", pool.len(), lineup.tally.gap);
                self.step = DraftStep::Results;
                Ok(&*self.lineup.insert(lineup))
            }
            Err(err) => {
                warn!("Team generation failed: {err}");
                Err(DraftError::Generate(err))
            }
        }
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            DraftStep::Players | DraftStep::Captains => DraftStep::Players,
            DraftStep::Generate => DraftStep::Captains,
            DraftStep::Results => DraftStep::Generate,
        };
    }

    // Start over with the same roster.
    pub fn reset(&mut self) {
        self.roster.clear_selection();
        self.captains = EnumMap::default();
        self.lineup = None;
        self.step = DraftStep::Players;
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::LocalGenerator;
    use crate::test_util::sample_pool;

    fn id(s: &str) -> PlayerId { PlayerId::from(s) }

    fn draft_with_selection(ratings: &[f64]) -> Draft {
        let mut draft = Draft::new(Roster::from_players(sample_pool(ratings)).unwrap());
        draft.select_all().unwrap();
        draft
    }

    #[test]
    fn needs_enough_players() {
        let mut draft = draft_with_selection(&[1.0, 2.0, 3.0]);
        assert_eq!(draft.confirm_players(), Err(DraftError::NotEnoughPlayers { selected: 3 }));
        draft.add_player("Zed", 1.0).unwrap();
        draft.confirm_players().unwrap();
        assert_eq!(draft.step(), DraftStep::Captains);
    }

    #[test]
    fn captains_must_be_set_and_distinct() {
        let mut draft = draft_with_selection(&[1.0, 2.0, 3.0, 0.0]);
        draft.confirm_players().unwrap();
        assert_eq!(draft.confirm_captains(), Err(DraftError::CaptainMissing));
        draft.set_captain(Side::A, &id("p1")).unwrap();
        draft.set_captain(Side::B, &id("p1")).unwrap();
        assert_eq!(draft.confirm_captains(), Err(DraftError::SameCaptains));
        assert_eq!(
            draft.set_captain(Side::B, &id("p9")),
            Err(DraftError::CaptainNotSelected(id("p9")))
        );
        draft.set_captain(Side::B, &id("p2")).unwrap();
        draft.confirm_captains().unwrap();
        assert_eq!(draft.step(), DraftStep::Generate);
    }

    #[test]
    fn deselecting_a_captain_clears_it() {
        let mut draft = draft_with_selection(&[1.0, 2.0, 3.0, 0.0, 2.0]);
        draft.confirm_players().unwrap();
        draft.set_captain(Side::A, &id("p3")).unwrap();
        draft.back();
        assert_eq!(draft.step(), DraftStep::Players);
        assert_eq!(draft.toggle_player(&id("p3")), Ok(false));
        assert_eq!(draft.captain(Side::A), None);
    }

    #[test]
    fn steps_are_enforced() {
        let mut draft = draft_with_selection(&[1.0, 2.0, 3.0, 0.0]);
        assert_eq!(
            draft.set_captain(Side::A, &id("p1")),
            Err(DraftError::WrongStep(DraftStep::Players))
        );
        draft.confirm_players().unwrap();
        assert_eq!(
            draft.toggle_player(&id("p1")),
            Err(DraftError::WrongStep(DraftStep::Captains))
        );
    }

    #[async_std::test]
    async fn generate_and_regenerate() {
        let mut draft = draft_with_selection(&[3.0, 3.0, 1.0, 1.0]);
        draft.confirm_players().unwrap();
        draft.set_captain(Side::A, &id("p1")).unwrap();
        draft.set_captain(Side::B, &id("p2")).unwrap();
        draft.confirm_captains().unwrap();

        let generator = LocalGenerator::seeded(1);
        let gap = draft.generate(&generator).await.unwrap().tally.gap;
        assert_eq!(gap, 0.0);
        assert_eq!(draft.step(), DraftStep::Results);

        draft.generate(&generator).await.unwrap();
        assert_eq!(draft.step(), DraftStep::Results);
        assert!(draft.lineup().is_some());

        draft.reset();
        assert_eq!(draft.step(), DraftStep::Players);
        assert!(draft.lineup().is_none());
        assert_eq!(draft.roster().selected_pool().len(), 0);
        assert_eq!(draft.roster().len(), 4);
    }
}
