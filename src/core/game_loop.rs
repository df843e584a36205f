//! Real-time tick driver shared by the game binary and the simulator.
//!
//! One call to [`CareerLoop::tick`] advances every engine in a fixed order
//! (training, season, endorsements) and reports what happened, so callers
//! never touch the engines directly.

use super::constants::{MAX_TICK_DELTA_SECONDS, OFFLINE_BANNER_MIN_SECONDS};
use super::game_state::GameState;
use super::offline::{process_offline_progression_at, OfflineReport};
use super::save::SnapshotStore;
use crate::economy::endorsement::tick_endorsements;
use crate::season::logic::SeasonEngine;
use crate::training::logic::tick_training;
use chrono::Utc;
use rand::Rng;

/// Result of one game tick - captures everything that happened.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Seconds actually simulated after clamping.
    pub delta: f64,
    pub tp_earned: f64,
    pub money_earned: f64,
    /// Games that finished this tick
    pub games_played: u32,
    /// Player-facing messages, oldest first
    pub notifications: Vec<String>,
    /// A snapshot was written this tick
    pub saved: bool,
    /// A snapshot was attempted this tick and failed
    pub save_failed: bool,
}

/// Owns a career and the engines that move it forward.
#[derive(Debug)]
pub struct CareerLoop {
    state: GameState,
    engine: SeasonEngine,
    autosave_accumulator: f64,
}

impl CareerLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            engine: SeasonEngine::new(),
            autosave_accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Season engine, for commands that need to queue notifications.
    pub fn engine_mut(&mut self) -> &mut SeasonEngine {
        &mut self.engine
    }

    /// Both halves at once, for commands that mutate state and notify.
    pub fn parts_mut(&mut self) -> (&mut GameState, &mut SeasonEngine) {
        (&mut self.state, &mut self.engine)
    }

    /// Swaps in a new career (after retirement) and returns the old one.
    pub fn replace_state(&mut self, state: GameState) -> GameState {
        self.autosave_accumulator = 0.0;
        self.engine.drain_notifications();
        std::mem::replace(&mut self.state, state)
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Advances by `raw_delta` seconds of wall time.
    pub fn tick<S, R>(&mut self, raw_delta: f64, store: &mut S, rng: &mut R) -> TickResult
    where
        S: SnapshotStore + ?Sized,
        R: Rng,
    {
        self.tick_at(raw_delta, Utc::now().timestamp_millis(), store, rng)
    }

    /// Advances by `raw_delta` seconds with an explicit wall clock.
    pub fn tick_at<S, R>(
        &mut self,
        raw_delta: f64,
        now_ms: i64,
        store: &mut S,
        rng: &mut R,
    ) -> TickResult
    where
        S: SnapshotStore + ?Sized,
        R: Rng,
    {
        // Longer gaps are the offline engine's job
        let delta = raw_delta.clamp(0.0, MAX_TICK_DELTA_SECONDS);
        let mut result = TickResult {
            delta,
            ..TickResult::default()
        };

        let games_before = self.state.season.match_history.len();

        result.tp_earned = tick_training(&mut self.state, delta, 1.0);
        self.engine.tick(&mut self.state, delta, rng);
        result.money_earned = tick_endorsements(&mut self.state, delta);

        result.games_played = self
            .state
            .season
            .match_history
            .len()
            .saturating_sub(games_before) as u32;
        self.state.last_tick_time = now_ms;

        let notifications = self.engine.drain_notifications();
        if self.state.settings.notifications_enabled {
            result.notifications = notifications;
        }

        self.autosave_accumulator += delta;
        if self.autosave_accumulator >= self.state.settings.autosave_interval_seconds {
            self.autosave_accumulator = 0.0;
            let previous_save = self.state.last_save_time;
            self.state.last_save_time = now_ms;
            match store.save(&self.state) {
                Ok(()) => result.saved = true,
                Err(err) => {
                    self.state.last_save_time = previous_save;
                    result.save_failed = true;
                    tracing::warn!(error = %err, "autosave failed");
                }
            }
        }

        result
    }

    /// Applies offline progress against the current wall clock.
    pub fn resume<R: Rng>(&mut self, rng: &mut R) -> (OfflineReport, Vec<String>) {
        self.resume_at(Utc::now().timestamp_millis(), rng)
    }

    /// Applies offline progress up to `now_ms` and builds the welcome-back
    /// messages. Returns no messages for gaps too short to mention.
    pub fn resume_at<R: Rng>(&mut self, now_ms: i64, rng: &mut R) -> (OfflineReport, Vec<String>) {
        let report = process_offline_progression_at(&mut self.state, &mut self.engine, now_ms, rng);
        // Per-game notifications from the replay are summarised below instead
        self.engine.drain_notifications();
        self.autosave_accumulator = 0.0;

        let messages = if report.elapsed_seconds >= OFFLINE_BANNER_MIN_SECONDS {
            welcome_back_messages(&report)
        } else {
            Vec::new()
        };
        (report, messages)
    }
}

fn welcome_back_messages(report: &OfflineReport) -> Vec<String> {
    let mut messages = vec![format!(
        "Welcome back! You were away for {}.",
        format_duration(report.elapsed_seconds)
    )];
    if report.tp_earned > 0.0 {
        messages.push(format!("Earned {:.0} training points.", report.tp_earned));
    }
    if report.money_earned > 0.0 {
        messages.push(format!("Earned ${:.0} from endorsements.", report.money_earned));
    }
    if !report.match_results.is_empty() {
        let games = report.match_results.len();
        let wins = report.wins();
        messages.push(format!(
            "Played {} game{} ({}-{}).",
            games,
            if games == 1 { "" } else { "s" },
            wins,
            games - wins
        ));
    }
    messages
}

fn format_duration(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Position;
    use crate::core::error::{SaveError, SaveResult};
    use crate::season::types::SeasonPhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const START: i64 = 1_700_000_000_000;

    #[derive(Default)]
    struct CountingStore {
        saves: u32,
    }

    impl SnapshotStore for CountingStore {
        fn save(&mut self, _state: &GameState) -> SaveResult<()> {
            self.saves += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingStore {
        attempts: u32,
    }

    impl SnapshotStore for FailingStore {
        fn save(&mut self, _state: &GameState) -> SaveResult<()> {
            self.attempts += 1;
            Err(SaveError::Truncated)
        }
    }

    fn qb_loop() -> CareerLoop {
        CareerLoop::new(GameState::new("Rookie".to_string(), Position::QB, START))
    }

    #[test]
    fn test_two_minutes_plays_two_games() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = CountingStore::default();
        let mut career = qb_loop();

        let mut games = 0;
        for i in 0..120 {
            let result = career.tick_at(1.0, START + (i + 1) * 1000, &mut store, &mut rng);
            games += result.games_played;
        }

        assert_eq!(games, 2);
        assert_eq!(career.state().season.match_history.len(), 2);
        assert_eq!(career.state().season.current_week, 3);
        assert_eq!(store.saves, 4);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = CountingStore::default();
        let mut career = qb_loop();

        let result = career.tick_at(3600.0, START, &mut store, &mut rng);
        assert_eq!(result.delta, 5.0);
        assert!((career.state().season.week_timer - 55.0).abs() < 1e-9);
        assert!(career.state().season.match_history.is_empty());
    }

    #[test]
    fn test_failed_save_is_not_retried_next_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = FailingStore::default();
        let mut career = qb_loop();

        let mut failures = 0;
        for i in 0..31 {
            let result = career.tick_at(1.0, START + i * 1000, &mut store, &mut rng);
            if result.save_failed {
                failures += 1;
            }
        }

        assert_eq!(store.attempts, 1);
        assert_eq!(failures, 1);
        assert_eq!(career.state().last_save_time, START);
        // Simulation carried on regardless
        assert!(career.state().resources.training_points > 0.0);
    }

    #[test]
    fn test_game_notifications_reach_the_caller() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = CountingStore::default();
        let mut career = qb_loop();

        let mut messages = Vec::new();
        for _ in 0..60 {
            messages.extend(career.tick_at(1.0, START, &mut store, &mut rng).notifications);
        }

        assert!(messages[0].starts_with("Game in progress vs "));
        assert!(messages.iter().any(|m| m.starts_with("Game complete: ")));
    }

    #[test]
    fn test_muted_notifications_are_discarded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = CountingStore::default();
        let mut career = qb_loop();
        career.state_mut().settings.notifications_enabled = false;

        for _ in 0..60 {
            let result = career.tick_at(1.0, START, &mut store, &mut rng);
            assert!(result.notifications.is_empty());
        }
        assert!(career.engine_mut().drain_notifications().is_empty());
    }

    #[test]
    fn test_off_season_keeps_earning() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut store = CountingStore::default();
        let mut career = qb_loop();
        career.state_mut().season.phase = SeasonPhase::OffSeason;

        let result = career.tick_at(5.0, START, &mut store, &mut rng);
        assert!(result.tp_earned > 0.0);
        assert_eq!(career.state().season.week_timer, 60.0);
    }

    #[test]
    fn test_resume_short_gap_has_no_banner() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut career = qb_loop();

        let (report, messages) = career.resume_at(START + 30_000, &mut rng);
        assert!(!report.is_empty());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_resume_summarises_time_away() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut career = qb_loop();

        let (report, messages) = career.resume_at(START + 2 * 3600 * 1000 + 5 * 60 * 1000, &mut rng);
        assert!(!report.match_results.is_empty());
        assert_eq!(messages[0], "Welcome back! You were away for 2h 5m.");
        assert!(messages.iter().any(|m| m.starts_with("Played ")));
        assert!(career.engine_mut().drain_notifications().is_empty());
    }

    #[test]
    fn test_replace_state_returns_previous_career() {
        let mut career = qb_loop();
        let next = GameState::new("Next".to_string(), Position::CB, START);

        let old = career.replace_state(next);
        assert_eq!(old.player.name, "Rookie");
        assert_eq!(career.state().player.name, "Next");
    }
}
