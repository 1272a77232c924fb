use fairkick::Player;
use fairkick::rating::{RatingTier, rating_label};

use crate::roster_file::load_roster;


fn describe_player(player: &Player) -> String {
    format!(
        "{:<20} {:<10} {} pts  [{}]  {}",
        player.name,
        rating_label(player.rating),
        player.rating,
        player.id,
        RatingTier::closest(player.rating).helper()
    )
}

pub fn run(roster_file: &str) -> anyhow::Result<()> {
    let mut roster = load_roster(roster_file)?;
    roster.select_all();
    let summary = roster.summary();
    for player in roster.players() {
        println!("{}", describe_player(player));
    }
    println!(
        "OK: {} players, average tier {} ({:.1} pts)",
        summary.squad_size, summary.average_label, summary.average_rating
    );
    Ok(())
}
