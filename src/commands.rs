//! Player commands.
//!
//! Every command validates first and mutates only on success, returning a
//! [`CommandResult`] whose message is shown to the player either way.

use crate::catalog::drills::drill_by_id;
use crate::character::attributes::{attribute_upgrade_cost, Attribute, Position};
use crate::character::prestige::{can_retire, retire as retire_career};
use crate::core::constants::{MAX_ATTRIBUTE_VALUE, RETIRE_MIN_SEASON};
use crate::core::error::CommandResult;
use crate::core::game_state::GameState;
use crate::economy::contract::process_season_end;
use crate::season::awards::archive_awards;
use crate::season::logic::SeasonEngine;
use crate::season::types::SeasonPhase;
use crate::training::logic::recompute_coach_multipliers;
use crate::training::types::DrillSlot;
use crate::upgrades::logic;
use chrono::Utc;
use rand::Rng;

pub fn purchase_upgrade(state: &mut GameState, upgrade_id: &str) -> CommandResult {
    logic::purchase_upgrade(state, upgrade_id, Utc::now().timestamp_millis())
}

/// Spends training points to raise one attribute by a point.
pub fn train_attribute(state: &mut GameState, attr: Attribute) -> CommandResult {
    let current = state.player.attributes.get(attr);
    if current >= MAX_ATTRIBUTE_VALUE {
        return CommandResult::fail(format!("{} is already maxed.", attr.name()));
    }

    let cost = attribute_upgrade_cost(attr, current);
    if state.resources.training_points < cost {
        return CommandResult::fail("Not enough Training Points!");
    }

    state.resources.training_points -= cost;
    state.player.raise_attribute(attr, 1);
    CommandResult::ok(format!("{} raised to {}.", attr.name(), current + 1))
}

/// Puts an unlocked drill into the first empty slot.
pub fn assign_drill(state: &mut GameState, drill_id: &str) -> CommandResult {
    let Some(drill) = drill_by_id(drill_id) else {
        return CommandResult::fail("Unknown drill.");
    };
    if !state.is_drill_unlocked(drill_id) {
        return CommandResult::fail(format!("{} is not unlocked yet.", drill.name));
    }
    if state.training.is_assigned(drill_id) {
        return CommandResult::fail("That drill is already active.");
    }
    let Some(index) = state.training.first_empty() else {
        return CommandResult::fail("No empty drill slots! Remove a drill first.");
    };

    state.training.assign(index, DrillSlot::new(drill_id));
    recompute_coach_multipliers(state);
    CommandResult::ok(format!("{} assigned to slot {}.", drill.name, index + 1))
}

pub fn remove_drill(state: &mut GameState, slot_index: usize) -> CommandResult {
    if slot_index >= state.training.capacity() {
        return CommandResult::fail("No such slot.");
    }
    match state.training.clear(slot_index) {
        Some(slot) => {
            let name = drill_by_id(&slot.drill_id)
                .map(|d| d.name)
                .unwrap_or(slot.drill_id.as_str());
            CommandResult::ok(format!("Removed {}.", name))
        }
        None => CommandResult::fail("That slot is already empty."),
    }
}

/// Buys a drill with money so it can be assigned.
pub fn unlock_drill(state: &mut GameState, drill_id: &str) -> CommandResult {
    let Some(drill) = drill_by_id(drill_id) else {
        return CommandResult::fail("Unknown drill.");
    };
    if state.is_drill_unlocked(drill_id) {
        return CommandResult::fail("Drill already unlocked.");
    }
    if state.season.season_number < drill.unlock_season {
        return CommandResult::fail(format!("Unlocks in Season {}.", drill.unlock_season));
    }
    if state.resources.money < drill.unlock_cost {
        return CommandResult::fail("Not enough money to unlock this drill.");
    }

    state.resources.money -= drill.unlock_cost;
    state.unlocked_drills.push(drill_id.to_string());
    CommandResult::ok(format!("Unlocked drill: {}", drill.name))
}

/// Leaves the off-season: archives this season's awards, runs the contract
/// year, then resets the season.
pub fn advance_season<R: Rng>(
    state: &mut GameState,
    engine: &mut SeasonEngine,
    rng: &mut R,
) -> CommandResult {
    match state.season.phase {
        SeasonPhase::OffSeason => {}
        SeasonPhase::Retired => return CommandResult::fail("This career has ended."),
        _ => return CommandResult::fail("The season is still in progress."),
    }

    let awards = state.season.awards_earned.clone();
    archive_awards(&mut state.legacy.career_awards, &awards);
    let signed = process_season_end(state, rng);
    engine.advance_to_next_season(state);

    let mut message = format!("Season {} begins!", state.season.season_number);
    if signed {
        message.push_str(&format!(
            " Signed a new {}-year deal at ${} per game.",
            state.contract.years_remaining, state.contract.salary_per_game
        ));
    }
    CommandResult::ok(message)
}

/// Retires the current player. On success the caller swaps in the returned
/// career; the current state is left frozen in the `Retired` phase.
pub fn retire(
    state: &mut GameState,
    new_name: String,
    new_position: Position,
) -> (CommandResult, Option<GameState>) {
    retire_at(state, new_name, new_position, Utc::now().timestamp_millis())
}

pub fn retire_at(
    state: &mut GameState,
    new_name: String,
    new_position: Position,
    now_ms: i64,
) -> (CommandResult, Option<GameState>) {
    if !can_retire(state) {
        return (
            CommandResult::fail(format!("Retirement unlocks in Season {}.", RETIRE_MIN_SEASON)),
            None,
        );
    }

    let message = format!("New legacy career started as {}!", new_name);
    match retire_career(state, new_name, new_position, now_ms) {
        Some(next) => (CommandResult::ok(message), Some(next)),
        None => (CommandResult::fail("Cannot retire yet."), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::awards::AwardKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rookie() -> GameState {
        GameState::new("Rookie".to_string(), Position::QB, 0)
    }

    #[test]
    fn test_train_attribute_spends_tp() {
        let mut state = rookie();
        let level = state.player.attributes.get(Attribute::ThrowAccuracy);
        let cost = attribute_upgrade_cost(Attribute::ThrowAccuracy, level);
        state.resources.training_points = cost + 1.0;

        let result = train_attribute(&mut state, Attribute::ThrowAccuracy);
        assert!(result.success, "{}", result.message);
        assert_eq!(state.player.attributes.get(Attribute::ThrowAccuracy), level + 1);
        assert!((state.resources.training_points - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_train_attribute_without_tp_changes_nothing() {
        let mut state = rookie();
        let before = state.player.attributes;

        let result = train_attribute(&mut state, Attribute::Speed);
        assert!(!result.success);
        assert_eq!(result.message, "Not enough Training Points!");
        assert_eq!(state.player.attributes, before);
        assert_eq!(state.resources.training_points, 0.0);
    }

    #[test]
    fn test_train_attribute_stops_at_cap() {
        let mut state = rookie();
        state.player.attributes.set(Attribute::Speed, MAX_ATTRIBUTE_VALUE);
        state.resources.training_points = 1e12;

        let result = train_attribute(&mut state, Attribute::Speed);
        assert!(!result.success);
        assert_eq!(state.resources.training_points, 1e12);
    }

    #[test]
    fn test_assign_drill_needs_a_free_slot() {
        let mut state = rookie();
        // Starting QB has three slots filled and throwing mechanics spare
        let result = assign_drill(&mut state, "throwing_mechanics");
        assert!(!result.success);
        assert_eq!(result.message, "No empty drill slots! Remove a drill first.");

        assert!(remove_drill(&mut state, 0).success);
        let result = assign_drill(&mut state, "throwing_mechanics");
        assert!(result.success, "{}", result.message);
        assert_eq!(state.training.slot(0).map(|s| s.drill_id.as_str()), Some("throwing_mechanics"));
    }

    #[test]
    fn test_assign_drill_rejects_duplicates_and_locked() {
        let mut state = rookie();
        remove_drill(&mut state, 2);

        assert!(!assign_drill(&mut state, "sprint_track").success);
        assert!(!assign_drill(&mut state, "agility_ladder").success);
        assert!(!assign_drill(&mut state, "no_such_drill").success);
        assert!(state.training.slot(2).is_none());
    }

    #[test]
    fn test_remove_empty_or_missing_slot_fails() {
        let mut state = rookie();
        assert!(remove_drill(&mut state, 0).success);
        assert!(!remove_drill(&mut state, 0).success);
        assert!(!remove_drill(&mut state, 9).success);
    }

    #[test]
    fn test_unlock_drill() {
        let mut state = rookie();

        let result = unlock_drill(&mut state, "agility_ladder");
        assert!(result.success, "{}", result.message);
        assert_eq!(result.message, "Unlocked drill: Agility Ladder");
        assert_eq!(state.resources.money, 500.0);
        assert!(state.is_drill_unlocked("agility_ladder"));

        assert!(!unlock_drill(&mut state, "agility_ladder").success);
        assert_eq!(state.resources.money, 500.0);
    }

    #[test]
    fn test_unlock_drill_gates() {
        let mut state = rookie();

        let result = unlock_drill(&mut state, "playbook_study");
        assert_eq!(result.message, "Unlocks in Season 2.");

        state.season.season_number = 2;
        let result = unlock_drill(&mut state, "playbook_study");
        assert!(result.success, "{}", result.message);

        let result = unlock_drill(&mut state, "hands_camp");
        assert_eq!(result.message, "Not enough money to unlock this drill.");
        assert!(!state.is_drill_unlocked("hands_camp"));
    }

    #[test]
    fn test_advance_season_requires_off_season() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut engine = SeasonEngine::new();
        let mut state = rookie();

        let result = advance_season(&mut state, &mut engine, &mut rng);
        assert!(!result.success);
        assert_eq!(state.season.season_number, 1);
    }

    #[test]
    fn test_advance_season_archives_and_resets() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut engine = SeasonEngine::new();
        let mut state = rookie();
        state.season.phase = SeasonPhase::OffSeason;
        state.season.current_week = 18;
        state.season.awards_earned = vec![AwardKind::ProBowl];

        let result = advance_season(&mut state, &mut engine, &mut rng);
        assert!(result.success);
        assert!(result.message.starts_with("Season 2 begins!"));
        assert_eq!(state.season.season_number, 2);
        assert_eq!(state.season.current_week, 1);
        assert_eq!(state.season.phase, SeasonPhase::RegularSeason);
        assert!(state.season.awards_earned.is_empty());
        assert_eq!(state.legacy.career_awards, vec![AwardKind::ProBowl]);
        assert_eq!(state.contract.years_remaining, 3);
    }

    #[test]
    fn test_retire_gate_and_success() {
        let mut state = rookie();
        let (result, next) = retire_at(&mut state, "Next".to_string(), Position::LB, 0);
        assert!(!result.success);
        assert!(next.is_none());
        assert_eq!(state.season.phase, SeasonPhase::RegularSeason);

        state.season.season_number = 3;
        let (result, next) = retire_at(&mut state, "Next".to_string(), Position::LB, 0);
        assert!(result.success);
        assert_eq!(result.message, "New legacy career started as Next!");
        let next = next.expect("retirement should produce a new career");
        assert_eq!(next.player.position, Position::LB);
        assert_eq!(next.legacy.prestige_count, 1);
        assert_eq!(state.season.phase, SeasonPhase::Retired);
    }
}
