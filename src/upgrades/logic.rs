use super::types::{PurchasedUpgrade, UpgradeListing};
use crate::catalog::upgrades::{all_upgrades, upgrade_by_id, Currency, UpgradeDefinition, UpgradeEffect};
use crate::core::constants::MAX_TRAINING_SLOTS;
use crate::core::error::CommandResult;
use crate::core::game_state::GameState;
use crate::training::logic::recompute_coach_multipliers;

/// Purchased upgrades joined with their definitions. Records whose id is no
/// longer in the catalog are skipped.
pub fn owned_upgrades(
    state: &GameState,
) -> impl Iterator<Item = (&'static UpgradeDefinition, u32)> + '_ {
    state
        .purchased_upgrades
        .iter()
        .filter_map(|p| upgrade_by_id(&p.upgrade_id).map(|def| (def, p.level)))
}

fn balance(state: &GameState, currency: Currency) -> f64 {
    match currency {
        Currency::Money => state.resources.money,
        Currency::ContractTokens => state.resources.contract_tokens as f64,
    }
}

fn is_locked(state: &GameState, def: &UpgradeDefinition) -> bool {
    state.season.season_number < def.unlock_season || state.resources.fame < def.unlock_fame
}

/// Validates and buys the next level of `upgrade_id`, applying eager effects.
/// Nothing is debited unless every gate passes.
pub fn purchase_upgrade(state: &mut GameState, upgrade_id: &str, now_ms: i64) -> CommandResult {
    let Some(def) = upgrade_by_id(upgrade_id) else {
        return CommandResult::fail("Unknown upgrade.");
    };
    if !def.available_to(state.player.position) {
        return CommandResult::fail(format!(
            "{} is not available to a {}.",
            def.name,
            state.player.position.label()
        ));
    }
    if state.season.season_number < def.unlock_season {
        return CommandResult::fail(format!("Unlocks in Season {}.", def.unlock_season));
    }
    if state.resources.fame < def.unlock_fame {
        return CommandResult::fail(format!("Requires {} fame.", def.unlock_fame));
    }

    let current_level = state.upgrade_level(upgrade_id);
    if current_level >= def.max_level {
        return CommandResult::fail("Already at max level.");
    }

    let cost = def.cost_for_next_level(current_level);
    if balance(state, def.currency) < cost {
        return CommandResult::fail(format!("Not enough {}.", def.currency.label()));
    }

    match def.currency {
        Currency::Money => state.resources.money -= cost,
        Currency::ContractTokens => state.resources.contract_tokens -= cost as u32,
    }

    let level = match state
        .purchased_upgrades
        .iter_mut()
        .find(|p| p.upgrade_id == upgrade_id)
    {
        Some(record) => {
            record.level += 1;
            record.purchased_at = now_ms;
            record.level
        }
        None => {
            state.purchased_upgrades.push(PurchasedUpgrade {
                upgrade_id: upgrade_id.to_string(),
                level: 1,
                purchased_at: now_ms,
            });
            1
        }
    };

    apply_effect(state, def);
    tracing::debug!(upgrade = upgrade_id, level, "upgrade purchased");

    CommandResult::ok(format!("Purchased {} (Level {})!", def.name, level))
}

/// Applies the one-level effect of a just-purchased upgrade. Match bonus and
/// passive income are read on demand and need nothing here.
fn apply_effect(state: &mut GameState, def: &UpgradeDefinition) {
    match def.effect {
        UpgradeEffect::SlotUnlock => {
            state.training.grow(1, MAX_TRAINING_SLOTS);
        }
        UpgradeEffect::AttributeBonus {
            attribute,
            magnitude,
        } => {
            state.player.raise_attribute(attribute, magnitude);
        }
        UpgradeEffect::DrillMultiplier { .. } => recompute_coach_multipliers(state),
        UpgradeEffect::MatchBonus(_) | UpgradeEffect::PassiveIncome(_) => {}
    }
}

/// Every upgrade visible to the player's position with its shop status.
pub fn upgrade_listing(state: &GameState) -> Vec<UpgradeListing> {
    all_upgrades()
        .iter()
        .filter(|def| def.available_to(state.player.position))
        .map(|def| {
            let current_level = state.upgrade_level(def.id);
            let cost = def.cost_for_next_level(current_level);
            UpgradeListing {
                def,
                current_level,
                locked: is_locked(state, def),
                maxed: current_level >= def.max_level,
                cost,
                can_afford: balance(state, def.currency) >= cost,
            }
        })
        .collect()
}

/// Unlocked and not maxed.
pub fn available_upgrades(state: &GameState) -> Vec<UpgradeListing> {
    upgrade_listing(state)
        .into_iter()
        .filter(|u| !u.locked && !u.maxed)
        .collect()
}

pub fn locked_upgrades(state: &GameState) -> Vec<UpgradeListing> {
    upgrade_listing(state)
        .into_iter()
        .filter(|u| u.locked)
        .collect()
}

pub fn maxed_upgrades(state: &GameState) -> Vec<UpgradeListing> {
    upgrade_listing(state)
        .into_iter()
        .filter(|u| u.maxed)
        .collect()
}

pub fn position_upgrades(state: &GameState) -> Vec<UpgradeListing> {
    upgrade_listing(state)
        .into_iter()
        .filter(|u| u.def.is_position_specific())
        .collect()
}

pub fn general_upgrades(state: &GameState) -> Vec<UpgradeListing> {
    upgrade_listing(state)
        .into_iter()
        .filter(|u| !u.def.is_position_specific())
        .collect()
}
