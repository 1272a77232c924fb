use std::time::Duration;

use anyhow::{Context, anyhow};
use fairkick::api::TeamResponse;
use fairkick::draft::Draft;
use fairkick::generator::TeamGenerator;
use fairkick::rating::rating_label;
use fairkick::roster::Roster;
use fairkick::{Lineup, Player, PlayerId, Side};
use itertools::Itertools;
use log::info;

use crate::roster_file::load_roster;
use crate::server_config::GeneratorOptions;


pub struct GenerateConfig {
    pub roster_file: String,
    pub captain_a: String,
    pub captain_b: String,
    // Names or ids of the players taking part. Everybody on the roster when empty.
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub remote: Option<String>,
    pub timeout: Duration,
    pub json: bool,
}

impl GenerateConfig {
    fn generator_options(&self) -> GeneratorOptions {
        match &self.remote {
            Some(base_url) => GeneratorOptions::Remote {
                base_url: base_url.clone(),
                timeout: self.timeout,
            },
            None => GeneratorOptions::Local { seed: self.seed },
        }
    }
}

// Players can be referred to either by id or by (case-insensitive) name.
fn resolve_player(roster: &Roster, key: &str) -> anyhow::Result<PlayerId> {
    roster
        .player(&PlayerId::from(key))
        .or_else(|| roster.find_by_name(key))
        .map(|p| p.id.clone())
        .ok_or_else(|| anyhow!("No player '{key}' in the roster."))
}

pub async fn run_draft(
    config: &GenerateConfig, roster: Roster, generator: &dyn TeamGenerator,
) -> anyhow::Result<Lineup> {
    let captain_a = resolve_player(&roster, &config.captain_a)?;
    let captain_b = resolve_player(&roster, &config.captain_b)?;
    let participants = config
        .players
        .iter()
        .map(|key| resolve_player(&roster, key))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut draft = Draft::new(roster);
    if participants.is_empty() {
        draft.select_all()?;
    } else {
        for id in participants.iter().chain([&captain_a, &captain_b]).unique() {
            draft.toggle_player(id)?;
        }
    }
    draft.confirm_players()?;
    draft.set_captain(Side::A, &captain_a)?;
    draft.set_captain(Side::B, &captain_b)?;
    draft.confirm_captains()?;
    Ok(draft.generate(generator).await?.clone())
}

fn render_team(side: Side, players: &[Player]) -> String {
    let total: f64 = players.iter().map(|p| p.rating).sum();
    let captain = players.first().map_or("-", |p| p.name.as_str());
    let lines = players
        .iter()
        .map(|p| format!("  {:<20} {} · {} pts", p.name, rating_label(p.rating), p.rating))
        .join("\n");
    format!("{} (captain {}): {} pts\n{}", side.display_name(), captain, total, lines)
}

pub fn render_lineup(lineup: &Lineup) -> String {
    format!(
        "{}\n\n{}\n\nBalance gap: {} tier points.\n{}",
        render_team(Side::A, lineup.team(Side::A)),
        render_team(Side::B, lineup.team(Side::B)),
        lineup.tally.gap,
        lineup.tally.verdict
    )
}

pub async fn run(config: GenerateConfig) -> anyhow::Result<()> {
    let roster = load_roster(&config.roster_file)?;
    let options = config.generator_options();
    info!("Using {:?} team generator", options);
    let generator = options.make_generator()?;
    let lineup = run_draft(&config, roster, generator.as_ref()).await?;
    if config.json {
        let json = serde_json::to_string_pretty(&TeamResponse::from(&lineup))
            .context("Failed to serialize teams")?;
        println!("{json}");
    } else {
        println!("{}", render_lineup(&lineup));
    }
    Ok(())
}
