use serde::{Deserialize, Serialize};

/// Per-game box score. Categories a position does not record stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatLine {
    pub passing_yards: u32,
    pub passing_tds: u32,
    pub interceptions: u32,
    /// Fraction in [0, 1].
    pub completion_pct: f64,
    pub rushing_yards: u32,
    pub rushing_tds: u32,
    pub receptions: u32,
    pub receiving_yards: u32,
    pub receiving_tds: u32,
    pub tackles: u32,
    pub sacks: u32,
    pub defensive_interceptions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub week: u32,
    pub season: u32,
    pub opponent: String,
    pub stats: StatLine,
    pub team_score: u32,
    pub opponent_score: u32,
    pub win: bool,
    pub xp_earned: u64,
    pub money_earned: f64,
    pub fame_earned: u64,
    /// Clamped to [0, 100].
    pub performance_score: f64,
}

impl MatchResult {
    pub fn outcome_label(&self) -> &'static str {
        if self.win {
            "WIN"
        } else {
            "LOSS"
        }
    }

    /// "WIN 24-17 vs Bears"
    pub fn summary(&self) -> String {
        format!(
            "{} {}-{} vs {}",
            self.outcome_label(),
            self.team_score,
            self.opponent_score,
            self.opponent
        )
    }
}
