//! Main simulation runner using CareerLoop for real game mechanics.
//!
//! Careers are driven through the same tick driver the game binary uses, at a
//! fixed one-second step with persistence disabled. The simulated player
//! shops and trains greedily and leaves each off-season immediately.

use super::config::SimConfig;
use super::report::SimReport;
use crate::catalog::drills::all_drills;
use crate::character::attributes::{attribute_upgrade_cost, Position};
use crate::commands::{advance_season, assign_drill, retire_at, train_attribute, unlock_drill};
use crate::core::constants::{MAX_ATTRIBUTE_VALUE, RETIRE_MIN_SEASON};
use crate::core::game_loop::CareerLoop;
use crate::core::game_state::GameState;
use crate::core::save::NullStore;
use crate::season::awards::AwardKind;
use crate::season::types::SeasonPhase;
use crate::upgrades::logic::{available_upgrades, purchase_upgrade};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Ticks between shopping trips during the season.
const SHOP_INTERVAL_TICKS: u64 = 60;

/// What one career achieved before retiring.
#[derive(Debug, Clone, Serialize)]
pub struct CareerStats {
    pub position: Position,
    /// Seasons played through to the off-season
    pub seasons: u32,
    pub games: u32,
    pub wins: u32,
    pub playoff_appearances: u32,
    pub titles: u32,
    pub final_rating: u32,
    pub awards: Vec<AwardKind>,
    /// Sum of all upgrade levels owned at retirement
    pub upgrade_levels: u32,
    pub ticks: u64,
    /// Hit `max_ticks_per_career` before the last season ended
    pub timed_out: bool,
}

impl CareerStats {
    fn new(position: Position) -> Self {
        Self {
            position,
            seasons: 0,
            games: 0,
            wins: 0,
            playoff_appearances: 0,
            titles: 0,
            final_rating: 0,
            awards: Vec::new(),
            upgrade_levels: 0,
            ticks: 0,
            timed_out: false,
        }
    }

    /// Folds a finished season in. Called once per off-season.
    fn record_season(&mut self, state: &GameState) {
        let season = &state.season;
        self.seasons += 1;
        self.games += season.match_history.len() as u32;
        self.wins += season.match_history.iter().filter(|m| m.win).count() as u32;
        if season.playoff_round.is_some() {
            self.playoff_appearances += 1;
        }
        if season.awards_earned.contains(&AwardKind::Champion) {
            self.titles += 1;
        }
        self.awards.extend(season.awards_earned.iter().copied());
    }

    fn finish(&mut self, state: &GameState, ticks: u64) {
        self.final_rating = state.player.rating();
        self.upgrade_levels = state.purchased_upgrades.iter().map(|p| p.level).sum();
        self.ticks = ticks;
    }
}

/// One run: a chain of careers, each retiring into the next.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub careers: Vec<CareerStats>,
    pub final_prestige: u32,
    pub final_tp_multiplier: f64,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            let titles: u32 = run_stats.careers.iter().map(|c| c.titles).sum();
            let ratings: Vec<String> = run_stats
                .careers
                .iter()
                .map(|c| format!("{} {}", c.position.code(), c.final_rating))
                .collect();
            println!(
                "Run {}/{} - Careers [{}], Titles {}, Prestige {}",
                run_idx + 1,
                config.num_runs,
                ratings.join(", "),
                titles,
                run_stats.final_prestige
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate one chain of careers.
fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut clock: i64 = 0;
    let mut career = CareerLoop::new(GameState::new(
        sim_name(0),
        config.position_for(0),
        clock,
    ));
    let mut careers = Vec::with_capacity(config.careers_per_run as usize);

    for index in 0..config.careers_per_run {
        careers.push(play_career(config, &mut career, &mut clock, rng));

        if index + 1 == config.careers_per_run {
            break;
        }
        let next_position = config.position_for(index + 1);
        let (_, next) = retire_at(
            career.state_mut(),
            sim_name(index + 1),
            next_position,
            clock,
        );
        match next {
            Some(next) => {
                career.replace_state(next);
            }
            None => break,
        }
    }

    let legacy = &career.state().legacy;
    RunStats {
        careers,
        final_prestige: legacy.prestige_count,
        final_tp_multiplier: legacy.tp_multiplier,
    }
}

/// Ticks one career until it reaches the off-season of its final season.
fn play_career<R: Rng>(
    config: &SimConfig,
    career: &mut CareerLoop,
    clock: &mut i64,
    rng: &mut R,
) -> CareerStats {
    let mut stats = CareerStats::new(career.state().player.position);
    let mut store = NullStore;
    let last_season = config.seasons_per_career.max(RETIRE_MIN_SEASON);
    let mut ticks: u64 = 0;

    loop {
        if ticks >= config.max_ticks_per_career {
            stats.timed_out = true;
            break;
        }

        *clock += 1000;
        career.tick_at(1.0, *clock, &mut store, rng);
        ticks += 1;

        if config.auto_shop && ticks % SHOP_INTERVAL_TICKS == 0 {
            go_shopping(career.state_mut(), *clock);
        }

        if career.state().season.phase == SeasonPhase::OffSeason {
            stats.record_season(career.state());
            if config.auto_shop {
                go_shopping(career.state_mut(), *clock);
            }
            if career.state().season.season_number >= last_season {
                break;
            }
            let (state, engine) = career.parts_mut();
            advance_season(state, engine, rng);
        }
    }

    stats.finish(career.state(), ticks);
    stats
}

/// Buys every affordable upgrade (cheapest first), unlocks useful drills,
/// fills empty slots and spends training points.
fn go_shopping(state: &mut GameState, now_ms: i64) {
    loop {
        let cheapest = available_upgrades(state)
            .into_iter()
            .filter(|u| u.is_purchasable())
            .min_by(|a, b| a.cost.total_cmp(&b.cost));
        let Some(listing) = cheapest else {
            break;
        };
        if !purchase_upgrade(state, listing.def.id, now_ms).success {
            break;
        }
    }

    let position = state.player.position;
    for drill in all_drills() {
        let useful = position
            .weights()
            .iter()
            .any(|&(attr, _)| attr == drill.target_attribute);
        if useful && !state.is_drill_unlocked(drill.id) {
            unlock_drill(state, drill.id);
        }
    }
    for drill in all_drills() {
        if state.training.first_empty().is_none() {
            break;
        }
        if state.is_drill_unlocked(drill.id) && !state.training.is_assigned(drill.id) {
            assign_drill(state, drill.id);
        }
    }

    spend_training_points(state);
}

/// Raises whichever weighted attribute gives the most rating per point
/// until the best choice is unaffordable.
fn spend_training_points(state: &mut GameState) {
    loop {
        let attributes = state.player.attributes;
        let best = state
            .player
            .position
            .weights()
            .iter()
            .filter(|&&(attr, _)| attributes.get(attr) < MAX_ATTRIBUTE_VALUE)
            .map(|&(attr, weight)| {
                let cost = attribute_upgrade_cost(attr, attributes.get(attr)).max(1.0);
                (attr, weight / cost)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1));
        let Some((attr, _)) = best else {
            break;
        };
        if !train_attribute(state, attr).success {
            break;
        }
    }
}

fn sim_name(index: u32) -> String {
    format!("SimPlayer {}", index + 1)
}
