use super::awards::AwardKind;
use crate::matches::types::MatchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonPhase {
    RegularSeason,
    Playoffs,
    OffSeason,
    Retired,
}

impl SeasonPhase {
    /// Games are only played (and the week timer only runs) in active phases.
    pub fn is_active(&self) -> bool {
        matches!(self, SeasonPhase::RegularSeason | SeasonPhase::Playoffs)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonPhase::RegularSeason => "Regular Season",
            SeasonPhase::Playoffs => "Playoffs",
            SeasonPhase::OffSeason => "Off-Season",
            SeasonPhase::Retired => "Retired",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn record(&mut self, win: bool) {
        if win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonState {
    pub season_number: u32,
    pub current_week: u32,
    pub phase: SeasonPhase,
    pub record: TeamRecord,
    #[serde(default)]
    pub playoff_round: Option<u32>,
    /// Every game played this season, oldest first.
    pub match_history: Vec<MatchResult>,
    #[serde(default)]
    pub awards_earned: Vec<AwardKind>,
    /// Seconds until the next game.
    pub week_timer: f64,
    #[serde(default)]
    pub game_in_progress: bool,
    /// Opponent shown while a game is in progress.
    #[serde(default)]
    pub current_opponent: Option<String>,
}

impl SeasonState {
    pub fn new(season_number: u32, match_interval_seconds: f64) -> Self {
        Self {
            season_number,
            current_week: 1,
            phase: SeasonPhase::RegularSeason,
            record: TeamRecord::default(),
            playoff_round: None,
            match_history: Vec::new(),
            awards_earned: Vec::new(),
            week_timer: match_interval_seconds,
            game_in_progress: false,
            current_opponent: None,
        }
    }

    /// Mean performance over this season's games, or 0 with no games.
    pub fn average_performance(&self) -> f64 {
        if self.match_history.is_empty() {
            return 0.0;
        }
        let total: f64 = self.match_history.iter().map(|m| m.performance_score).sum();
        total / self.match_history.len() as f64
    }
}
