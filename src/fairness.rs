use serde::{Deserialize, Serialize};


// Ordered by threshold. The first entry whose inclusive upper bound covers the gap wins; the
// last one is unbounded.
pub const FAIRNESS_MESSAGES: [(f64, &str); 4] = [
    (0.0, "Perfectly balanced – as all things should be."),
    (1.0, "Teams look tight! Expect a competitive match."),
    (2.0, "Slight edge to one side, but still playable."),
    (f64::INFINITY, "Wide gap detected – consider a quick reshuffle."),
];

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tally {
    pub total_a: f64,
    pub total_b: f64,
    pub gap: f64,
    pub verdict: String,
}

pub fn pick_message(gap: f64) -> &'static str {
    FAIRNESS_MESSAGES
        .iter()
        .find(|(threshold, _)| gap <= *threshold)
        .map_or(FAIRNESS_MESSAGES[FAIRNESS_MESSAGES.len() - 1].1, |&(_, message)| message)
}

pub fn classify(total_a: f64, total_b: f64) -> Tally {
    let gap = (total_a - total_b).abs();
    Tally {
        total_a,
        total_b,
        gap,
        verdict: pick_message(gap).to_owned(),
    }
}
