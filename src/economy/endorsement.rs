//! Passive income from endorsement upgrades.

use crate::catalog::upgrades::UpgradeEffect;
use crate::core::game_state::GameState;
use crate::upgrades::logic::owned_upgrades;

/// Money per second: `legacy.money_multiplier * sum(level * magnitude)` over
/// passive-income upgrades.
pub fn endorsement_rate(state: &GameState) -> f64 {
    let base: f64 = owned_upgrades(state)
        .filter_map(|(def, level)| match def.effect {
            UpgradeEffect::PassiveIncome(per_second) => Some(per_second * level as f64),
            _ => None,
        })
        .sum();
    base * state.legacy.money_multiplier
}

/// Credits `delta` seconds of passive income. Returns the amount earned.
pub fn tick_endorsements(state: &mut GameState, delta: f64) -> f64 {
    let earned = endorsement_rate(state) * delta;
    state.resources.money += earned;
    earned
}
