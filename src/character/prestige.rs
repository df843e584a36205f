use super::attributes::Position;
use crate::core::constants::{
    PRESTIGE_MONEY_BONUS_PER_RANK, PRESTIGE_RATING_BONUS_CAP, PRESTIGE_RATING_BONUS_PER_RANK,
    PRESTIGE_TP_BONUS_PER_RANK, RETIRE_MIN_SEASON,
};
use crate::core::game_state::GameState;
use crate::season::awards::{archive_awards, AwardKind};
use crate::season::types::SeasonPhase;
use serde::{Deserialize, Serialize};

/// Hall of fame entry for a finished career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetiredPlayer {
    pub name: String,
    pub position: Position,
    pub rating: u32,
    pub seasons: u32,
    pub awards: Vec<AwardKind>,
}

/// Everything that survives retirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyState {
    pub prestige_count: u32,
    pub tp_multiplier: f64,
    pub money_multiplier: f64,
    /// Added to every starting attribute of the next career.
    pub starting_rating_bonus: u32,
    /// One entry per award kind ever won.
    pub career_awards: Vec<AwardKind>,
    pub retired_players: Vec<RetiredPlayer>,
}

impl Default for LegacyState {
    fn default() -> Self {
        let (tp_multiplier, money_multiplier, starting_rating_bonus) = legacy_bonuses(0);
        Self {
            prestige_count: 0,
            tp_multiplier,
            money_multiplier,
            starting_rating_bonus,
            career_awards: Vec::new(),
            retired_players: Vec::new(),
        }
    }
}

/// Permanent bonuses for a prestige count
///
/// # Returns
/// `(tp_multiplier, money_multiplier, starting_rating_bonus)`, all linear in
/// `prestige_count` with the rating bonus capped at 10.
pub fn legacy_bonuses(prestige_count: u32) -> (f64, f64, u32) {
    let count = prestige_count as f64;
    (
        1.0 + PRESTIGE_TP_BONUS_PER_RANK * count,
        1.0 + PRESTIGE_MONEY_BONUS_PER_RANK * count,
        (PRESTIGE_RATING_BONUS_PER_RANK * prestige_count).min(PRESTIGE_RATING_BONUS_CAP),
    )
}

/// Retirement opens up from season 3 onwards.
pub fn can_retire(state: &GameState) -> bool {
    state.season.season_number >= RETIRE_MIN_SEASON
}

/// Ends the current career and returns a fresh one seeded from the updated
/// legacy.
///
/// The outgoing state is marked `Retired` so it stops simulating; callers
/// replace it wholesale with the returned state. Returns `None` (leaving the
/// state untouched) if the player cannot retire yet.
pub fn retire(
    state: &mut GameState,
    new_name: String,
    new_position: Position,
    current_time: i64,
) -> Option<GameState> {
    if !can_retire(state) {
        return None;
    }

    state.season.phase = SeasonPhase::Retired;
    state.season.game_in_progress = false;
    state.season.current_opponent = None;

    let mut legacy = state.legacy.clone();
    archive_awards(&mut legacy.career_awards, &state.season.awards_earned);
    legacy.retired_players.push(RetiredPlayer {
        name: state.player.name.clone(),
        position: state.player.position,
        rating: state.player.rating(),
        seasons: state.season.season_number,
        awards: state.season.awards_earned.clone(),
    });

    legacy.prestige_count += 1;
    let (tp, money, rating_bonus) = legacy_bonuses(legacy.prestige_count);
    legacy.tp_multiplier = tp;
    legacy.money_multiplier = money;
    legacy.starting_rating_bonus = rating_bonus;

    tracing::info!(
        player = %state.player.name,
        prestige = legacy.prestige_count,
        "career retired"
    );

    Some(GameState::with_legacy(
        new_name,
        new_position,
        legacy,
        current_time,
    ))
}
