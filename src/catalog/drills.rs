//! Drill definitions.

use crate::character::attributes::{Attribute, Position};
use serde::{Deserialize, Serialize};

/// Drill family. Coach upgrades target a family rather than a single drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillType {
    Sprint,
    WeightRoom,
    RouteRunning,
    ThrowingMechanics,
    FilmStudy,
    Agility,
    Coverage,
    PlaybookStudy,
    BlockingTechnique,
}

#[derive(Debug, Clone)]
pub struct DrillDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub drill_type: DrillType,
    pub target_attribute: Attribute,
    /// Training points per second before any multiplier.
    pub base_rate: f64,
    /// Money required to unlock.
    pub unlock_cost: f64,
    pub unlock_season: u32,
    pub description: &'static str,
}

pub static DRILLS: [DrillDefinition; 14] = [
    DrillDefinition {
        id: "sprint_track",
        name: "Track Sprints",
        drill_type: DrillType::Sprint,
        target_attribute: Attribute::Speed,
        base_rate: 0.5,
        unlock_cost: 0.0,
        unlock_season: 0,
        description: "Timed 40-yard dashes to build explosive speed.",
    },
    DrillDefinition {
        id: "weight_room_basic",
        name: "Weight Room",
        drill_type: DrillType::WeightRoom,
        target_attribute: Attribute::Strength,
        base_rate: 0.4,
        unlock_cost: 0.0,
        unlock_season: 0,
        description: "Core lifts for functional strength.",
    },
    DrillDefinition {
        id: "film_study",
        name: "Film Study",
        drill_type: DrillType::FilmStudy,
        target_attribute: Attribute::Awareness,
        base_rate: 0.35,
        unlock_cost: 0.0,
        unlock_season: 0,
        description: "Game tape sessions on opposing schemes.",
    },
    DrillDefinition {
        id: "agility_ladder",
        name: "Agility Ladder",
        drill_type: DrillType::Agility,
        target_attribute: Attribute::Elusiveness,
        base_rate: 0.4,
        unlock_cost: 500.0,
        unlock_season: 1,
        description: "Ladder work for lateral quickness.",
    },
    DrillDefinition {
        id: "route_running_cones",
        name: "Cone Routes",
        drill_type: DrillType::RouteRunning,
        target_attribute: Attribute::RouteRunning,
        base_rate: 0.45,
        unlock_cost: 750.0,
        unlock_season: 1,
        description: "Precise routes around cones for timing.",
    },
    DrillDefinition {
        id: "throwing_mechanics",
        name: "QB Mechanics",
        drill_type: DrillType::ThrowingMechanics,
        target_attribute: Attribute::ThrowAccuracy,
        base_rate: 0.5,
        unlock_cost: 0.0,
        unlock_season: 0,
        description: "Footwork and release mechanics.",
    },
    DrillDefinition {
        id: "coverage_drills",
        name: "DB Coverage",
        drill_type: DrillType::Coverage,
        target_attribute: Attribute::Coverage,
        base_rate: 0.45,
        unlock_cost: 600.0,
        unlock_season: 1,
        description: "Mirror drills and zone assignments.",
    },
    DrillDefinition {
        id: "playbook_study",
        name: "Playbook Study",
        drill_type: DrillType::PlaybookStudy,
        target_attribute: Attribute::Awareness,
        base_rate: 0.6,
        unlock_cost: 1000.0,
        unlock_season: 2,
        description: "Playbook memorization to read plays faster.",
    },
    DrillDefinition {
        id: "blocking_tech",
        name: "Blocking Tech",
        drill_type: DrillType::BlockingTechnique,
        target_attribute: Attribute::Strength,
        base_rate: 0.55,
        unlock_cost: 800.0,
        unlock_season: 2,
        description: "Hand placement and leverage.",
    },
    DrillDefinition {
        id: "endurance_camp",
        name: "Endurance Camp",
        drill_type: DrillType::Sprint,
        target_attribute: Attribute::Stamina,
        base_rate: 0.4,
        unlock_cost: 500.0,
        unlock_season: 1,
        description: "Distance runs and conditioning circuits.",
    },
    DrillDefinition {
        id: "throw_power_training",
        name: "Arm Strength",
        drill_type: DrillType::ThrowingMechanics,
        target_attribute: Attribute::ThrowPower,
        base_rate: 0.45,
        unlock_cost: 1500.0,
        unlock_season: 3,
        description: "Resistance band throws.",
    },
    DrillDefinition {
        id: "hands_camp",
        name: "Hands Camp",
        drill_type: DrillType::RouteRunning,
        target_attribute: Attribute::Catching,
        base_rate: 0.5,
        unlock_cost: 1200.0,
        unlock_season: 2,
        description: "JUGS machine reps.",
    },
    DrillDefinition {
        id: "tackle_circuit",
        name: "Tackle Circuit",
        drill_type: DrillType::WeightRoom,
        target_attribute: Attribute::Tackle,
        base_rate: 0.5,
        unlock_cost: 0.0,
        unlock_season: 0,
        description: "Pad drills and wrap-up technique.",
    },
    DrillDefinition {
        id: "pursuit_drills",
        name: "Pursuit Drills",
        drill_type: DrillType::Sprint,
        target_attribute: Attribute::Pursuit,
        base_rate: 0.45,
        unlock_cost: 400.0,
        unlock_season: 1,
        description: "Pursuit angles to run down ball carriers.",
    },
];

pub fn all_drills() -> &'static [DrillDefinition] {
    &DRILLS
}

pub fn drill_by_id(id: &str) -> Option<&'static DrillDefinition> {
    DRILLS.iter().find(|d| d.id == id)
}

/// Drills unlocked at the start of a career. The first three fill the
/// starting training slots.
pub fn starting_drill_ids(position: Position) -> [&'static str; 4] {
    match position {
        Position::QB => [
            "sprint_track",
            "weight_room_basic",
            "film_study",
            "throwing_mechanics",
        ],
        Position::WR | Position::TE => [
            "sprint_track",
            "weight_room_basic",
            "film_study",
            "route_running_cones",
        ],
        Position::RB => [
            "sprint_track",
            "weight_room_basic",
            "film_study",
            "agility_ladder",
        ],
        Position::LB => [
            "tackle_circuit",
            "weight_room_basic",
            "film_study",
            "endurance_camp",
        ],
        Position::CB | Position::S => [
            "tackle_circuit",
            "sprint_track",
            "film_study",
            "coverage_drills",
        ],
    }
}
