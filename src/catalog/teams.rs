//! Opponent names.

use rand::Rng;

pub const TEAM_NAMES: [&str; 32] = [
    "Cardinals", "Falcons", "Ravens", "Bills", "Panthers", "Bears", "Bengals", "Browns",
    "Cowboys", "Broncos", "Lions", "Packers", "Texans", "Colts", "Jaguars", "Chiefs",
    "Raiders", "Chargers", "Rams", "Dolphins", "Vikings", "Patriots", "Saints", "Giants",
    "Jets", "Eagles", "Steelers", "49ers", "Seahawks", "Buccaneers", "Titans", "Commanders",
];

/// Draws an opponent uniformly from the team table.
pub fn random_opponent<R: Rng>(rng: &mut R) -> String {
    TEAM_NAMES[rng.gen_range(0..TEAM_NAMES.len())].to_string()
}
