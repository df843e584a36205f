//! Read-only, id-keyed configuration tables: drills, upgrades and opponents.

pub mod drills;
pub mod teams;
pub mod upgrades;

pub use drills::{all_drills, drill_by_id, starting_drill_ids, DrillDefinition, DrillType};
pub use teams::{random_opponent, TEAM_NAMES};
pub use upgrades::{
    all_upgrades, upgrade_by_id, Currency, UpgradeCategory, UpgradeDefinition, UpgradeEffect,
};
