use crate::catalog::upgrades::UpgradeDefinition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedUpgrade {
    pub upgrade_id: String,
    pub level: u32,
    /// Unix milliseconds of the most recent level purchase.
    pub purchased_at: i64,
}

/// Shop view of one upgrade for the current player.
#[derive(Debug, Clone)]
pub struct UpgradeListing {
    pub def: &'static UpgradeDefinition,
    pub current_level: u32,
    /// Season or fame gate not yet met.
    pub locked: bool,
    pub maxed: bool,
    pub cost: f64,
    pub can_afford: bool,
}

impl UpgradeListing {
    pub fn is_purchasable(&self) -> bool {
        !self.locked && !self.maxed && self.can_afford
    }
}
