//! Season and career awards.

use crate::core::constants::{
    LEAGUE_MVP_MIN_PERFORMANCE, LEAGUE_MVP_MIN_WIN_RATIO, PRO_BOWL_MIN_PERFORMANCE,
    REGULAR_SEASON_WEEKS, ROOKIE_MIN_PERFORMANCE,
};
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardKind {
    ProBowl,
    LeagueMvp,
    RookieOfYear,
    Champion,
    ChampionshipMvp,
}

impl AwardKind {
    pub fn label(&self) -> &'static str {
        match self {
            AwardKind::ProBowl => "Pro Bowl",
            AwardKind::LeagueMvp => "League MVP",
            AwardKind::RookieOfYear => "Rookie of the Year",
            AwardKind::Champion => "League Champion",
            AwardKind::ChampionshipMvp => "Championship MVP",
        }
    }

    /// Notification text when the award is won.
    pub fn announcement(&self) -> &'static str {
        match self {
            AwardKind::ProBowl => "You were selected to the Pro Bowl!",
            AwardKind::LeagueMvp => "You won the League MVP award!",
            AwardKind::RookieOfYear => "You won Rookie of the Year!",
            AwardKind::Champion => "YOU WON THE CHAMPIONSHIP!",
            AwardKind::ChampionshipMvp => "You were named Championship MVP!",
        }
    }
}

/// Regular-season awards from the season's average performance and record.
pub fn evaluate_regular_season(
    season_number: u32,
    average_performance: f64,
    wins: u32,
) -> Vec<AwardKind> {
    let win_ratio = wins as f64 / REGULAR_SEASON_WEEKS as f64;
    let mut awards = Vec::new();

    if average_performance > PRO_BOWL_MIN_PERFORMANCE {
        awards.push(AwardKind::ProBowl);
    }
    if average_performance > LEAGUE_MVP_MIN_PERFORMANCE && win_ratio >= LEAGUE_MVP_MIN_WIN_RATIO {
        awards.push(AwardKind::LeagueMvp);
    }
    if season_number == 1 && average_performance > ROOKIE_MIN_PERFORMANCE {
        awards.push(AwardKind::RookieOfYear);
    }
    awards
}

pub fn season_awards(state: &GameState) -> &[AwardKind] {
    &state.season.awards_earned
}

/// Archived legacy awards followed by this season's.
pub fn all_career_awards(state: &GameState) -> Vec<AwardKind> {
    state
        .legacy
        .career_awards
        .iter()
        .chain(state.season.awards_earned.iter())
        .copied()
        .collect()
}

/// Appends each award kind not already archived.
pub fn archive_awards(archive: &mut Vec<AwardKind>, awards: &[AwardKind]) {
    for award in awards {
        if !archive.contains(award) {
            archive.push(*award);
        }
    }
}
