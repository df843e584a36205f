//! Upgrade definitions.

use super::drills::DrillType;
use crate::character::attributes::{Attribute, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeCategory {
    Equipment,
    Coach,
    Diet,
    Endorsement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Money,
    ContractTokens,
}

impl Currency {
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Money => "money",
            Currency::ContractTokens => "contract tokens",
        }
    }
}

/// What a purchased level does. Magnitudes are per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    SlotUnlock,
    AttributeBonus {
        attribute: Attribute,
        magnitude: u32,
    },
    /// `target: None` boosts every drill.
    DrillMultiplier {
        magnitude: f64,
        target: Option<DrillType>,
    },
    MatchBonus(f64),
    /// Money per second.
    PassiveIncome(f64),
}

#[derive(Debug, Clone)]
pub struct UpgradeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: UpgradeCategory,
    pub cost_per_level: f64,
    pub currency: Currency,
    pub effect: UpgradeEffect,
    pub max_level: u32,
    pub unlock_season: u32,
    pub unlock_fame: u64,
    /// Empty means every position.
    pub positions: &'static [Position],
}

impl UpgradeDefinition {
    pub fn available_to(&self, position: Position) -> bool {
        self.positions.is_empty() || self.positions.contains(&position)
    }

    pub fn is_position_specific(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Cost of the level after `current_level`.
    pub fn cost_for_next_level(&self, current_level: u32) -> f64 {
        self.cost_per_level * (current_level + 1) as f64
    }
}

use self::UpgradeCategory::{Coach, Diet, Endorsement, Equipment};
use self::UpgradeEffect::{AttributeBonus, DrillMultiplier, MatchBonus, PassiveIncome, SlotUnlock};

pub static UPGRADES: [UpgradeDefinition; 34] = [
    // Equipment
    UpgradeDefinition {
        id: "cleats_basic",
        name: "Pro Cleats",
        description: "High-traction cleats for on-field performance.",
        category: Equipment,
        cost_per_level: 2000.0,
        currency: Currency::Money,
        effect: MatchBonus(1.5),
        max_level: 3,
        unlock_season: 0,
        unlock_fame: 0,
        positions: &[],
    },
    UpgradeDefinition {
        id: "gloves",
        name: "Receiver Gloves",
        description: "Sticky gloves for catching consistency.",
        category: Equipment,
        cost_per_level: 1500.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Catching,
            magnitude: 2,
        },
        max_level: 3,
        unlock_season: 0,
        unlock_fame: 0,
        positions: &[],
    },
    UpgradeDefinition {
        id: "helmet_pro",
        name: "Pro Helmet",
        description: "Reduces fatigue in tough games.",
        category: Equipment,
        cost_per_level: 3000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Stamina,
            magnitude: 2,
        },
        max_level: 3,
        unlock_season: 1,
        unlock_fame: 10,
        positions: &[],
    },
    // Coaches
    UpgradeDefinition {
        id: "qb_coach",
        name: "QB Coach",
        description: "Throwing drills +25%.",
        category: Coach,
        cost_per_level: 5000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.25,
            target: Some(DrillType::ThrowingMechanics),
        },
        max_level: 3,
        unlock_season: 1,
        unlock_fame: 20,
        positions: &[Position::QB],
    },
    UpgradeDefinition {
        id: "speed_coach",
        name: "Speed Coach",
        description: "Sprint drills +25%.",
        category: Coach,
        cost_per_level: 5000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.25,
            target: Some(DrillType::Sprint),
        },
        max_level: 3,
        unlock_season: 1,
        unlock_fame: 20,
        positions: &[],
    },
    UpgradeDefinition {
        id: "extra_slot",
        name: "Extra Drill Slot",
        description: "One more training drill slot.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: SlotUnlock,
        max_level: 2,
        unlock_season: 2,
        unlock_fame: 50,
        positions: &[],
    },
    // Diet
    UpgradeDefinition {
        id: "nutrition_plan",
        name: "Nutrition Plan",
        description: "All training rates +15%.",
        category: Diet,
        cost_per_level: 4000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.15,
            target: None,
        },
        max_level: 3,
        unlock_season: 1,
        unlock_fame: 30,
        positions: &[],
    },
    // Endorsements
    UpgradeDefinition {
        id: "local_sponsor",
        name: "Local Sponsor",
        description: "Pays $100/min passively.",
        category: Endorsement,
        cost_per_level: 3000.0,
        currency: Currency::Money,
        effect: PassiveIncome(100.0 / 60.0),
        max_level: 3,
        unlock_season: 1,
        unlock_fame: 15,
        positions: &[],
    },
    UpgradeDefinition {
        id: "national_deal",
        name: "National Deal",
        description: "Pays $500/min passively.",
        category: Endorsement,
        cost_per_level: 20000.0,
        currency: Currency::Money,
        effect: PassiveIncome(500.0 / 60.0),
        max_level: 5,
        unlock_season: 3,
        unlock_fame: 100,
        positions: &[],
    },
    // Tier 2
    UpgradeDefinition {
        id: "recovery_pool",
        name: "Recovery Pool",
        description: "Ice baths and cryotherapy. Permanent Stamina.",
        category: Diet,
        cost_per_level: 6000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Stamina,
            magnitude: 2,
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 30,
        positions: &[],
    },
    UpgradeDefinition {
        id: "film_suite",
        name: "Advanced Film Suite",
        description: "Film Study drills +30%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.30,
            target: Some(DrillType::FilmStudy),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 30,
        positions: &[],
    },
    UpgradeDefinition {
        id: "regional_sponsor",
        name: "Regional Sponsor",
        description: "Pays $250/min passively.",
        category: Endorsement,
        cost_per_level: 10000.0,
        currency: Currency::Money,
        effect: PassiveIncome(250.0 / 60.0),
        max_level: 3,
        unlock_season: 3,
        unlock_fame: 50,
        positions: &[],
    },
    UpgradeDefinition {
        id: "agent_retainer",
        name: "Agent Retainer",
        description: "Paid in contract tokens. Pays $300/min.",
        category: Endorsement,
        cost_per_level: 1.0,
        currency: Currency::ContractTokens,
        effect: PassiveIncome(300.0 / 60.0),
        max_level: 2,
        unlock_season: 2,
        unlock_fame: 40,
        positions: &[],
    },
    // Tier 3
    UpgradeDefinition {
        id: "elite_equipment",
        name: "Elite Equipment Set",
        description: "Professional-grade gear. Match bonus.",
        category: Equipment,
        cost_per_level: 20000.0,
        currency: Currency::Money,
        effect: MatchBonus(3.0),
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[],
    },
    UpgradeDefinition {
        id: "performance_analyst",
        name: "Performance Analyst",
        description: "All drill rates +15%.",
        category: Coach,
        cost_per_level: 25000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.15,
            target: None,
        },
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[],
    },
    UpgradeDefinition {
        id: "signature_endorsement",
        name: "Signature Endorsement",
        description: "Pays $600/min passively.",
        category: Endorsement,
        cost_per_level: 75000.0,
        currency: Currency::Money,
        effect: PassiveIncome(600.0 / 60.0),
        max_level: 3,
        unlock_season: 6,
        unlock_fame: 250,
        positions: &[],
    },
    // Tier 4
    UpgradeDefinition {
        id: "personal_trainer",
        name: "Personal Performance Coach",
        description: "All drill rates +25%.",
        category: Diet,
        cost_per_level: 100000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.25,
            target: None,
        },
        max_level: 2,
        unlock_season: 8,
        unlock_fame: 400,
        positions: &[],
    },
    UpgradeDefinition {
        id: "hof_preparation",
        name: "Hall of Fame Gear",
        description: "The pinnacle of equipment. Match bonus.",
        category: Equipment,
        cost_per_level: 200000.0,
        currency: Currency::Money,
        effect: MatchBonus(6.0),
        max_level: 1,
        unlock_season: 10,
        unlock_fame: 600,
        positions: &[],
    },
    UpgradeDefinition {
        id: "mega_deal",
        name: "Mega Endorsement Deal",
        description: "Pays $5,000/min passively.",
        category: Endorsement,
        cost_per_level: 250000.0,
        currency: Currency::Money,
        effect: PassiveIncome(5000.0 / 60.0),
        max_level: 3,
        unlock_season: 10,
        unlock_fame: 600,
        positions: &[],
    },
    // QB
    UpgradeDefinition {
        id: "qb_elite_coaching",
        name: "Elite QB Coaching",
        description: "Throwing drills +40%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.40,
            target: Some(DrillType::ThrowingMechanics),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::QB],
    },
    UpgradeDefinition {
        id: "pocket_presence",
        name: "Pocket Presence Training",
        description: "Permanent Throw Accuracy.",
        category: Equipment,
        cost_per_level: 10000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::ThrowAccuracy,
            magnitude: 2,
        },
        max_level: 3,
        unlock_season: 3,
        unlock_fame: 50,
        positions: &[Position::QB],
    },
    UpgradeDefinition {
        id: "qb_mentor",
        name: "QB Mentor Program",
        description: "All drill rates +30%.",
        category: Coach,
        cost_per_level: 40000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.30,
            target: None,
        },
        max_level: 3,
        unlock_season: 6,
        unlock_fame: 200,
        positions: &[Position::QB],
    },
    // WR / TE
    UpgradeDefinition {
        id: "receiver_route_coach",
        name: "Route Running Coach",
        description: "Route Running drills +40%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.40,
            target: Some(DrillType::RouteRunning),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::WR, Position::TE],
    },
    UpgradeDefinition {
        id: "hands_specialist",
        name: "Hands Specialist",
        description: "Permanent Catching.",
        category: Equipment,
        cost_per_level: 7000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Catching,
            magnitude: 3,
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::WR, Position::TE],
    },
    UpgradeDefinition {
        id: "elite_receiver_program",
        name: "Elite Receiver Camp",
        description: "Major match performance boost.",
        category: Equipment,
        cost_per_level: 30000.0,
        currency: Currency::Money,
        effect: MatchBonus(4.0),
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[Position::WR, Position::TE],
    },
    // RB
    UpgradeDefinition {
        id: "rb_vision_coach",
        name: "Vision Training Coach",
        description: "Film Study drills +40%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.40,
            target: Some(DrillType::FilmStudy),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::RB],
    },
    UpgradeDefinition {
        id: "agility_specialist",
        name: "Agility Specialist",
        description: "Permanent Elusiveness.",
        category: Equipment,
        cost_per_level: 7000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Elusiveness,
            magnitude: 3,
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::RB],
    },
    UpgradeDefinition {
        id: "elite_rb_program",
        name: "Elite RB Camp",
        description: "Major match performance boost.",
        category: Equipment,
        cost_per_level: 30000.0,
        currency: Currency::Money,
        effect: MatchBonus(4.0),
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[Position::RB],
    },
    // LB
    UpgradeDefinition {
        id: "pass_rush_coach",
        name: "Pass Rush Coach",
        description: "Weight Room drills +40%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.40,
            target: Some(DrillType::WeightRoom),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::LB],
    },
    UpgradeDefinition {
        id: "lb_instincts",
        name: "Linebacker Instincts",
        description: "Permanent Tackle.",
        category: Equipment,
        cost_per_level: 7000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Tackle,
            magnitude: 3,
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::LB],
    },
    UpgradeDefinition {
        id: "elite_lb_program",
        name: "Elite Linebacker Camp",
        description: "Major match performance boost.",
        category: Equipment,
        cost_per_level: 30000.0,
        currency: Currency::Money,
        effect: MatchBonus(4.0),
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[Position::LB],
    },
    // CB / S
    UpgradeDefinition {
        id: "coverage_specialist",
        name: "Coverage Specialist",
        description: "Coverage drills +40%.",
        category: Coach,
        cost_per_level: 8000.0,
        currency: Currency::Money,
        effect: DrillMultiplier {
            magnitude: 0.40,
            target: Some(DrillType::Coverage),
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::CB, Position::S],
    },
    UpgradeDefinition {
        id: "db_instincts",
        name: "DB Instincts Training",
        description: "Permanent Coverage.",
        category: Equipment,
        cost_per_level: 7000.0,
        currency: Currency::Money,
        effect: AttributeBonus {
            attribute: Attribute::Coverage,
            magnitude: 3,
        },
        max_level: 3,
        unlock_season: 2,
        unlock_fame: 25,
        positions: &[Position::CB, Position::S],
    },
    UpgradeDefinition {
        id: "elite_db_program",
        name: "Elite DB Camp",
        description: "Major match performance boost.",
        category: Equipment,
        cost_per_level: 30000.0,
        currency: Currency::Money,
        effect: MatchBonus(4.0),
        max_level: 3,
        unlock_season: 5,
        unlock_fame: 150,
        positions: &[Position::CB, Position::S],
    },
];

pub fn all_upgrades() -> &'static [UpgradeDefinition] {
    &UPGRADES
}

pub fn upgrade_by_id(id: &str) -> Option<&'static UpgradeDefinition> {
    UPGRADES.iter().find(|u| u.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_upgrade_ids_unique() {
        let ids: HashSet<_> = UPGRADES.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), UPGRADES.len());
    }

    #[test]
    fn test_every_upgrade_has_levels() {
        for def in all_upgrades() {
            assert!(def.max_level >= 1, "{} has no levels", def.id);
            assert!(def.cost_per_level > 0.0, "{} is free", def.id);
        }
    }

    #[test]
    fn test_cost_scales_with_level() {
        let def = upgrade_by_id("cleats_basic").unwrap();
        assert_eq!(def.cost_for_next_level(0), 2000.0);
        assert_eq!(def.cost_for_next_level(2), 6000.0);
    }

    #[test]
    fn test_position_filter() {
        let def = upgrade_by_id("qb_coach").unwrap();
        assert!(def.available_to(Position::QB));
        assert!(!def.available_to(Position::LB));
        assert!(upgrade_by_id("speed_coach").unwrap().available_to(Position::LB));
    }

    #[test]
    fn test_token_priced_upgrade() {
        let def = upgrade_by_id("agent_retainer").unwrap();
        assert_eq!(def.currency, Currency::ContractTokens);
        assert_eq!(upgrade_by_id("cleats_basic").unwrap().currency, Currency::Money);
    }

    #[test]
    fn test_catalog_shape() {
        let specialists = UPGRADES.iter().filter(|u| u.is_position_specific()).count();
        assert_eq!(specialists, 16);
        let token_priced: Vec<_> = UPGRADES
            .iter()
            .filter(|u| u.currency == Currency::ContractTokens)
            .map(|u| u.id)
            .collect();
        assert_eq!(token_priced, vec!["agent_retainer"]);
        assert_eq!(
            upgrade_by_id("hof_preparation").map(|u| u.effect),
            Some(UpgradeEffect::MatchBonus(6.0))
        );
    }
}
