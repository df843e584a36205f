use super::constants::{
    DEFAULT_AUTOSAVE_INTERVAL_SECONDS, DEFAULT_MATCH_INTERVAL_SECONDS, SAVE_VERSION,
    STARTING_MONEY, STARTING_TRAINING_SLOTS,
};
use crate::catalog::drills::starting_drill_ids;
use crate::character::attributes::Position;
use crate::character::player::Player;
use crate::character::prestige::LegacyState;
use crate::economy::contract::Contract;
use crate::season::types::SeasonState;
use crate::training::types::{DrillSlot, TrainingState};
use crate::upgrades::types::PurchasedUpgrade;
use serde::{Deserialize, Serialize};

/// Spendable and accumulated currencies. Only engines add to these and only
/// validated commands subtract from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub money: f64,
    pub training_points: f64,
    pub fame: u64,
    pub contract_tokens: u32,
    pub xp: u64,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            money: STARTING_MONEY,
            training_points: 0.0,
            fame: 0,
            contract_tokens: 0,
            xp: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub autosave_interval_seconds: f64,
    pub match_interval_seconds: f64,
    pub notifications_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            autosave_interval_seconds: DEFAULT_AUTOSAVE_INTERVAL_SECONDS,
            match_interval_seconds: DEFAULT_MATCH_INTERVAL_SECONDS,
            notifications_enabled: true,
        }
    }
}

/// The whole simulation aggregate. Every engine mutates one of these inside
/// the synchronous tick window; retirement replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub version: u32,
    /// Unix milliseconds of the last persisted snapshot.
    pub last_save_time: i64,
    /// Unix milliseconds of the last processed tick.
    pub last_tick_time: i64,
    pub player: Player,
    pub resources: Resources,
    pub training: TrainingState,
    #[serde(default)]
    pub contract: Contract,
    pub season: SeasonState,
    #[serde(default)]
    pub purchased_upgrades: Vec<PurchasedUpgrade>,
    #[serde(default)]
    pub unlocked_drills: Vec<String>,
    #[serde(default)]
    pub legacy: LegacyState,
    #[serde(default)]
    pub settings: GameSettings,
}

impl GameState {
    /// Creates a first career with no legacy.
    pub fn new(name: String, position: Position, current_time: i64) -> Self {
        Self::with_legacy(name, position, LegacyState::default(), current_time)
    }

    /// Creates a fresh career seeded from an existing legacy.
    pub fn with_legacy(
        name: String,
        position: Position,
        legacy: LegacyState,
        current_time: i64,
    ) -> Self {
        let settings = GameSettings::default();
        let player = Player::new(name, position, legacy.starting_rating_bonus);
        let drill_ids = starting_drill_ids(position);

        let mut training = TrainingState::with_capacity(STARTING_TRAINING_SLOTS);
        for (index, drill_id) in drill_ids.iter().take(STARTING_TRAINING_SLOTS).enumerate() {
            training.assign(index, DrillSlot::new(drill_id));
        }

        Self {
            version: SAVE_VERSION,
            last_save_time: current_time,
            last_tick_time: current_time,
            player,
            resources: Resources::default(),
            training,
            contract: Contract::default(),
            season: SeasonState::new(1, settings.match_interval_seconds),
            purchased_upgrades: Vec::new(),
            unlocked_drills: drill_ids.iter().map(|id| id.to_string()).collect(),
            legacy,
            settings,
        }
    }

    pub fn upgrade_level(&self, upgrade_id: &str) -> u32 {
        self.purchased_upgrades
            .iter()
            .find(|p| p.upgrade_id == upgrade_id)
            .map(|p| p.level)
            .unwrap_or(0)
    }

    pub fn is_drill_unlocked(&self, drill_id: &str) -> bool {
        self.unlocked_drills.iter().any(|id| id == drill_id)
    }
}
