//! Season state machine.
//!
//! RegularSeason runs the week timer and plays one game per interval. After
//! the last regular-season week the engine hands out awards and either moves
//! to Playoffs or straight to OffSeason. OffSeason is left only through
//! [`SeasonEngine::advance_to_next_season`].

use super::awards::{evaluate_regular_season, AwardKind};
use super::types::{SeasonPhase, SeasonState};
use crate::catalog::teams::random_opponent;
use crate::core::constants::{
    CHAMPIONSHIP_MVP_MIN_PERFORMANCE, FINAL_PLAYOFF_ROUND, GAME_DURATION_SECONDS,
    PLAYOFF_WIN_THRESHOLD, REGULAR_SEASON_WEEKS,
};
use crate::core::game_state::GameState;
use crate::matches::logic::simulate_match;
use crate::matches::types::MatchResult;
use rand::Rng;

/// Drives the season and collects player-facing notifications. Each engine
/// owns its own queue.
#[derive(Debug, Default)]
pub struct SeasonEngine {
    notifications: Vec<String>,
}

impl SeasonEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the week timer down and plays a game when it expires. Frozen
    /// outside RegularSeason and Playoffs.
    pub fn tick<R: Rng>(&mut self, state: &mut GameState, delta: f64, rng: &mut R) {
        if !state.season.phase.is_active() {
            return;
        }

        state.season.week_timer -= delta;

        if !state.season.game_in_progress
            && state.season.week_timer > 0.0
            && state.season.week_timer <= GAME_DURATION_SECONDS
        {
            let opponent = random_opponent(rng);
            self.notify(format!("Game in progress vs {}...", opponent));
            state.season.game_in_progress = true;
            state.season.current_opponent = Some(opponent);
        }

        if state.season.week_timer <= 0.0 {
            self.advance_week(state, rng);
            state.season.week_timer = state.settings.match_interval_seconds;
        }
    }

    /// Plays this week's game and applies every consequence. Returns the
    /// result, or `None` when the phase has no games.
    pub fn advance_week<R: Rng>(
        &mut self,
        state: &mut GameState,
        rng: &mut R,
    ) -> Option<MatchResult> {
        state.season.game_in_progress = false;

        match state.season.phase {
            SeasonPhase::RegularSeason => Some(self.play_regular_season_week(state, rng)),
            SeasonPhase::Playoffs => Some(self.play_playoff_round(state, rng)),
            SeasonPhase::OffSeason | SeasonPhase::Retired => None,
        }
    }

    fn play_regular_season_week<R: Rng>(
        &mut self,
        state: &mut GameState,
        rng: &mut R,
    ) -> MatchResult {
        let result = simulate_match(state, rng);
        apply_match_result(state, &result);
        state.season.record.record(result.win);
        state.season.current_opponent = None;
        self.notify(format!("Game complete: {}", result.summary()));

        state.season.current_week += 1;
        if state.season.current_week > REGULAR_SEASON_WEEKS {
            self.end_regular_season(state);
        }
        result
    }

    fn play_playoff_round<R: Rng>(
        &mut self,
        state: &mut GameState,
        rng: &mut R,
    ) -> MatchResult {
        let round = state.season.playoff_round.unwrap_or(1);
        let result = simulate_match(state, rng);
        apply_match_result(state, &result);
        state.season.record.record(result.win);
        state.season.current_opponent = None;

        if !result.win {
            self.notify("Eliminated from the playoffs.");
            self.start_off_season(state);
        } else if round >= FINAL_PLAYOFF_ROUND {
            self.grant_award(state, AwardKind::Champion);
            if result.performance_score > CHAMPIONSHIP_MVP_MIN_PERFORMANCE {
                self.grant_award(state, AwardKind::ChampionshipMvp);
            }
            self.start_off_season(state);
        } else {
            state.season.playoff_round = Some(round + 1);
            self.notify(format!("Playoff win! Advancing to round {}", round + 1));
        }
        result
    }

    fn end_regular_season(&mut self, state: &mut GameState) {
        let season = &state.season;
        let awards = evaluate_regular_season(
            season.season_number,
            season.average_performance(),
            season.record.wins,
        );
        for award in awards {
            self.grant_award(state, award);
        }

        state.resources.contract_tokens += 1;

        if state.season.record.wins >= PLAYOFF_WIN_THRESHOLD {
            state.season.phase = SeasonPhase::Playoffs;
            state.season.playoff_round = Some(1);
            self.notify("Your team made the playoffs!");
            tracing::debug!(season = state.season.season_number, "entered playoffs");
        } else {
            self.start_off_season(state);
        }
    }

    /// Ages the player a year and refreshes the rating so permanent bonuses
    /// bought during the season show up.
    pub fn start_off_season(&mut self, state: &mut GameState) {
        state.season.phase = SeasonPhase::OffSeason;
        state.season.game_in_progress = false;
        state.season.current_opponent = None;
        state.player.age += 1;
        state.player.refresh_rating();

        let record = state.season.record;
        self.notify(format!(
            "Season {} complete! Record: {}-{}",
            state.season.season_number, record.wins, record.losses
        ));
        tracing::debug!(
            season = state.season.season_number,
            wins = record.wins,
            losses = record.losses,
            "season complete"
        );
    }

    /// Resets every season-scoped field and starts the next RegularSeason.
    pub fn advance_to_next_season(&mut self, state: &mut GameState) {
        state.season = SeasonState::new(
            state.season.season_number + 1,
            state.settings.match_interval_seconds,
        );
        self.notify(format!("Season {} begins!", state.season.season_number));
    }

    fn grant_award(&mut self, state: &mut GameState, award: AwardKind) {
        state.season.awards_earned.push(award);
        self.notify(award.announcement());
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message.into());
    }

    /// Returns queued notifications and clears the queue.
    pub fn drain_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

/// Adds a game to the history and credits its rewards.
pub fn apply_match_result(state: &mut GameState, result: &MatchResult) {
    state.season.match_history.push(result.clone());
    state.resources.money += result.money_earned;
    state.resources.xp += result.xp_earned;
    state.resources.fame += result.fame_earned;
    state.player.total_xp += result.xp_earned;
    state.player.total_fame += result.fame_earned;
}
