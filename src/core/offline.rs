//! Offline progression system.
//!
//! Replays the time the career was not running: training at reduced
//! efficiency, endorsements at full rate, and every game whose week timer
//! would have expired. Uses the same rate and week functions as the live tick
//! so the two never drift apart.

use super::constants::{OFFLINE_CAP_SECONDS, OFFLINE_MIN_ELAPSED_SECONDS, OFFLINE_TP_EFFICIENCY};
use super::game_state::GameState;
use crate::economy::endorsement::endorsement_rate;
use crate::matches::types::MatchResult;
use crate::season::logic::SeasonEngine;
use crate::training::logic::rate_per_second;
use chrono::Utc;
use rand::Rng;

/// Report of offline progression results
#[derive(Debug, Default, Clone)]
pub struct OfflineReport {
    /// Seconds actually replayed, after the cap. Zero when nothing was applied.
    pub elapsed_seconds: f64,
    pub tp_earned: f64,
    pub money_earned: f64,
    /// Games played while away, oldest first.
    pub match_results: Vec<MatchResult>,
}

impl OfflineReport {
    pub fn is_empty(&self) -> bool {
        self.elapsed_seconds == 0.0
    }

    pub fn wins(&self) -> usize {
        self.match_results.iter().filter(|m| m.win).count()
    }
}

/// Processes offline progression against the current wall clock.
pub fn process_offline_progression<R: Rng>(
    state: &mut GameState,
    engine: &mut SeasonEngine,
    rng: &mut R,
) -> OfflineReport {
    process_offline_progression_at(state, engine, Utc::now().timestamp_millis(), rng)
}

/// Processes offline progression up to `now_ms` (unix milliseconds).
pub fn process_offline_progression_at<R: Rng>(
    state: &mut GameState,
    engine: &mut SeasonEngine,
    now_ms: i64,
    rng: &mut R,
) -> OfflineReport {
    let elapsed = (now_ms - state.last_save_time) as f64 / 1000.0;

    if elapsed < OFFLINE_MIN_ELAPSED_SECONDS {
        state.last_save_time = now_ms;
        state.last_tick_time = now_ms;
        return OfflineReport::default();
    }

    let capped = elapsed.min(OFFLINE_CAP_SECONDS);

    let tp_earned = rate_per_second(state) * capped * OFFLINE_TP_EFFICIENCY;
    state.resources.training_points += tp_earned;

    let money_earned = endorsement_rate(state) * capped;
    state.resources.money += money_earned;

    let match_results = replay_season(state, engine, capped, rng);

    state.last_save_time = now_ms;
    state.last_tick_time = now_ms;

    tracing::info!(
        elapsed = capped,
        tp = tp_earned,
        money = money_earned,
        games = match_results.len(),
        "applied offline progress"
    );

    OfflineReport {
        elapsed_seconds: capped,
        tp_earned,
        money_earned,
        match_results,
    }
}

/// Consumes `seconds` against the week timer, playing each game that falls
/// inside the window. Stops at the first phase change, so reaching the
/// playoffs or the off-season leaves the rest of the window unplayed.
fn replay_season<R: Rng>(
    state: &mut GameState,
    engine: &mut SeasonEngine,
    seconds: f64,
    rng: &mut R,
) -> Vec<MatchResult> {
    let mut results = Vec::new();
    if !state.season.phase.is_active() {
        return results;
    }

    // A zero interval would never consume the window
    let interval = state.settings.match_interval_seconds.max(1.0);

    if state.season.week_timer > seconds {
        state.season.week_timer -= seconds;
        return results;
    }

    // Time left over after each game; goes negative once the next game
    // would fall after the window.
    let mut remaining = seconds - state.season.week_timer.max(0.0);
    let mut phase_changed = false;
    loop {
        let phase = state.season.phase;
        results.extend(engine.advance_week(state, rng));
        if state.season.phase != phase {
            phase_changed = true;
            break;
        }
        remaining -= interval;
        if remaining < 0.0 {
            break;
        }
    }

    state.season.week_timer = if !state.season.phase.is_active() {
        0.0
    } else if phase_changed {
        // The new phase starts its countdown from the game just played
        interval
    } else {
        // Folding the negative remainder leaves the timer in (0, interval],
        // the same value a live tick would show at this moment.
        -remaining
    };

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Position;
    use crate::season::types::SeasonPhase;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const START: i64 = 1_700_000_000_000;

    fn career() -> GameState {
        GameState::new("Away".to_string(), Position::WR, START)
    }

    #[test]
    fn test_short_gap_only_refreshes_timestamps() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();
        let tp_before = state.resources.training_points;

        let report = process_offline_progression_at(&mut state, &mut engine, START + 5_000, &mut rng);

        assert!(report.is_empty());
        assert_eq!(report.tp_earned, 0.0);
        assert_eq!(report.money_earned, 0.0);
        assert!(report.match_results.is_empty());
        assert_eq!(state.resources.training_points, tp_before);
        assert_eq!(state.season.week_timer, 60.0);
        assert_eq!(state.last_save_time, START + 5_000);
        assert_eq!(state.last_tick_time, START + 5_000);
    }

    #[test]
    fn test_off_season_training_capped_at_eight_hours() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();
        state.season.phase = SeasonPhase::OffSeason;
        let rate = rate_per_second(&state);

        let now = START + 3 * 24 * 3600 * 1000;
        let report = process_offline_progression_at(&mut state, &mut engine, now, &mut rng);

        assert_eq!(report.elapsed_seconds, 28_800.0);
        assert!((report.tp_earned - rate * 28_800.0 * 0.5).abs() < 1e-6);
        assert!(report.match_results.is_empty());
        assert_eq!(state.season.current_week, 1);
    }

    #[test]
    fn test_partial_week_just_counts_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();

        let report = process_offline_progression_at(&mut state, &mut engine, START + 45_000, &mut rng);
        assert!(report.match_results.is_empty());
        assert!((state.season.week_timer - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_replays_whole_weeks_and_folds_remainder() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();

        // 60 s for week one, then two more full intervals, then 10 s into the next.
        let report = process_offline_progression_at(&mut state, &mut engine, START + 190_000, &mut rng);

        assert_eq!(report.match_results.len(), 3);
        assert_eq!(state.season.current_week, 4);
        assert!((state.season.week_timer - 50.0).abs() < 1e-9);
        let weeks: Vec<u32> = report.match_results.iter().map(|m| m.week).collect();
        assert_eq!(weeks, vec![1, 2, 3]);
    }

    #[test]
    fn test_timer_stays_within_interval() {
        let mut engine = SeasonEngine::new();
        for seconds in [61_u64, 119, 120, 121, 599, 1_000] {
            let mut rng = ChaCha8Rng::seed_from_u64(seconds);
            let mut state = career();
            let report = process_offline_progression_at(
                &mut state,
                &mut engine,
                START + seconds as i64 * 1000,
                &mut rng,
            );
            let timer = state.season.week_timer;
            assert!(timer > 0.0 && timer <= 60.0, "timer {} after {}s", timer, seconds);
            // First week plus each later game plus time already run down on
            // the next week must account for the whole window.
            let consumed = report.match_results.len() as f64 * 60.0 + 60.0 - timer;
            assert!((consumed - seconds as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn test_phase_change_halts_replay() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();
        state.season.current_week = 17;
        // Out of reach: the last game is lost and the season ends 2-15.
        state.season.season_number = 40;
        state.season.record.wins = 2;
        state.season.record.losses = 14;

        let report = process_offline_progression_at(&mut state, &mut engine, START + 3_600_000, &mut rng);

        assert_eq!(report.match_results.len(), 1);
        assert_eq!(state.season.phase, SeasonPhase::OffSeason);
        assert_eq!(state.season.week_timer, 0.0);
    }

    #[test]
    fn test_making_playoffs_halts_replay() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();
        state.player.attributes = crate::character::attributes::Attributes::uniform(99);
        state.player.refresh_rating();
        state.season.current_week = 17;
        state.season.season_number = 0;
        state.season.record.wins = 9;
        state.season.record.losses = 7;

        let report = process_offline_progression_at(&mut state, &mut engine, START + 3_600_000, &mut rng);

        assert_eq!(report.match_results.len(), 1);
        assert_eq!(state.season.phase, SeasonPhase::Playoffs);
        assert_eq!(state.season.playoff_round, Some(1));
        assert_eq!(state.season.week_timer, 60.0);
        assert_eq!(state.season.match_history.len(), 1);
    }

    #[test]
    fn test_passive_income_full_rate() {
        use crate::upgrades::types::PurchasedUpgrade;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut engine = SeasonEngine::new();
        let mut state = career();
        state.season.phase = SeasonPhase::OffSeason;
        state.purchased_upgrades.push(PurchasedUpgrade {
            upgrade_id: "local_sponsor".to_string(),
            level: 3,
            purchased_at: 0,
        });

        let report = process_offline_progression_at(&mut state, &mut engine, START + 100_000, &mut rng);
        assert!((report.money_earned - 500.0).abs() < 1e-6);
        assert!((state.resources.money - 1500.0).abs() < 1e-6);
    }
}
