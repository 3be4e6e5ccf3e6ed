use super::*;
use gtl_core::Frequency;
use gtl_gameplay::Action;
use gtl_gameplay::Key;

/// Composes the rationale shown after a judgment.
///
/// Four lines: the situation, the reference mix by tier, where the learner's
/// action fell, and the verdict. Pure formatting over already-graded data.
pub fn explain(spot: &impl Spot, action: &Action, verdict: Verdict, breakdown: &Breakdown) -> String {
    [
        situation(spot),
        mix(spot, breakdown),
        placement(action, breakdown.tier_of(action)),
        format!("Verdict: {}.", verdict),
    ]
    .join("\n")
}

fn situation(spot: &impl Spot) -> String {
    let stage = spot.stage();
    let holding = match spot.hole() {
        gtl_cards::Hole::Hidden => String::new(),
        hole => format!(" holding {}", hole),
    };
    let board = match spot.board().size() {
        0 => String::from("no board"),
        _ => format!("board {}", spot.board()),
    };
    let before = match spot.history().on(stage) {
        [] => format!("No one has acted before you on the {}.", stage),
        plays => format!(
            "Before you: {}.",
            plays
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        ),
    };
    format!(
        "{}{} on the {}, {}, pot {}bb, {}bb behind. {}",
        spot.seat(),
        holding,
        stage,
        board,
        spot.pot(),
        spot.stacks()[spot.seat().index()],
        before
    )
}

fn mix(spot: &impl Spot, breakdown: &Breakdown) -> String {
    let tiers = Tier::all()
        .into_iter()
        .map(|tier| {
            let keys = breakdown
                .get(tier)
                .iter()
                .map(|(key, _)| entry(spot, key))
                .collect::<Vec<String>>();
            match keys.is_empty() {
                true => format!("{} frequency: none", tier),
                false => format!("{} frequency: {}", tier, keys.join(", ")),
            }
        })
        .collect::<Vec<String>>();
    format!("Reference mix: {}.", tiers.join("; "))
}

fn entry(spot: &impl Spot, key: &Key) -> String {
    match (spot.solution().encoding(), spot.solution().get(key)) {
        (Encoding::Percent, Some(entry)) => format!("{} ({})", key, percent(entry.weight())),
        _ => key.to_string(),
    }
}

fn percent(frequency: Frequency) -> String {
    match frequency.fract() == 0.0 {
        true => format!("{:.0}%", frequency),
        false => format!("{:.1}%", frequency),
    }
}

fn placement(action: &Action, tier: Option<Tier>) -> String {
    let what = format!("Your action {} ({})", action, action.label());
    match tier {
        Some(Tier::High) => format!("{} is a high-frequency play in this spot.", what),
        Some(Tier::Medium) => format!("{} is a medium-frequency play, mixed in some of the time.", what),
        Some(Tier::Low) => format!("{} is a low-frequency play, rarely chosen here.", what),
        None => format!("{} is not part of any recommended mix.", what),
    }
}
