//! Training point accrual from active drills.

use super::types::DrillSlot;
use crate::catalog::drills::{drill_by_id, DrillDefinition};
use crate::catalog::upgrades::UpgradeEffect;
use crate::core::game_state::GameState;
use crate::upgrades::logic::owned_upgrades;

/// `legacy.tp_multiplier * (1 + sum of untargeted drill multipliers)`.
pub fn global_multiplier(state: &GameState) -> f64 {
    let bonus: f64 = owned_upgrades(state)
        .filter_map(|(def, level)| match def.effect {
            UpgradeEffect::DrillMultiplier {
                magnitude,
                target: None,
            } => Some(magnitude * level as f64),
            _ => None,
        })
        .sum();
    state.legacy.tp_multiplier * (1.0 + bonus)
}

/// Rewrites every occupied slot's cached coach multiplier from the purchased
/// drill-type-targeted upgrades. Call after assigning a drill or buying a
/// drill multiplier.
pub fn recompute_coach_multipliers(state: &mut GameState) {
    let targeted: Vec<_> = owned_upgrades(state)
        .filter_map(|(def, level)| match def.effect {
            UpgradeEffect::DrillMultiplier {
                magnitude,
                target: Some(drill_type),
            } => Some((drill_type, magnitude * level as f64)),
            _ => None,
        })
        .collect();

    for slot in state.training.active_slots_mut() {
        let Some(drill) = drill_by_id(&slot.drill_id) else {
            continue;
        };
        slot.coach_multiplier = 1.0
            + targeted
                .iter()
                .filter(|(drill_type, _)| *drill_type == drill.drill_type)
                .map(|(_, bonus)| bonus)
                .sum::<f64>();
    }
}

/// Training points per second for one occupied slot.
pub fn slot_rate(drill: &DrillDefinition, slot: &DrillSlot, global: f64) -> f64 {
    drill.base_rate * slot.coach_multiplier * global
}

/// Sum of the current per-slot rates in training points per second.
pub fn rate_per_second(state: &GameState) -> f64 {
    let global = global_multiplier(state);
    state
        .training
        .active_slots()
        .filter_map(|(_, slot)| drill_by_id(&slot.drill_id).map(|d| slot_rate(d, slot, global)))
        .sum()
}

/// Accrues `delta` seconds of training at the given efficiency (1.0 live).
/// Returns the training points gained.
pub fn tick_training(state: &mut GameState, delta: f64, efficiency: f64) -> f64 {
    let global = global_multiplier(state);
    let mut gained_total = 0.0;

    for slot in state.training.active_slots_mut() {
        let Some(drill) = drill_by_id(&slot.drill_id) else {
            continue;
        };
        let gained = slot_rate(drill, slot, global) * delta * efficiency;
        slot.accumulated_tp += gained;
        gained_total += gained;
    }

    state.resources.training_points += gained_total;
    gained_total
}
