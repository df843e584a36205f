use crate::core::constants::{
    ATTRIBUTE_COST_GROWTH, BASE_ATTRIBUTE_VALUE, NUM_ATTRIBUTES, POSITION_HEAD_START,
    RATING_FALLBACK, RATING_MAX, RATING_MIN,
};
use serde::{Deserialize, Serialize};

/// Playing position. Determines rating weights, starting drills and stat lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    LB,
    CB,
    S,
}

impl Position {
    pub const ALL: [Position; 7] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::LB,
        Position::CB,
        Position::S,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::QB => "Quarterback",
            Position::RB => "Running Back",
            Position::WR => "Wide Receiver",
            Position::TE => "Tight End",
            Position::LB => "Linebacker",
            Position::CB => "Cornerback",
            Position::S => "Safety",
        }
    }

    pub fn is_defense(&self) -> bool {
        matches!(self, Position::LB | Position::CB | Position::S)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
        }
    }

    /// Parses the short code used on the command line ("QB", "wr", ...).
    pub fn from_code(code: &str) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
    }

    /// Rating weights for this position. Each map sums to 1.0.
    pub fn weights(&self) -> &'static [(Attribute, f64)] {
        use Attribute::*;
        match self {
            Position::QB => &[
                (ThrowAccuracy, 0.30),
                (ThrowPower, 0.20),
                (Awareness, 0.20),
                (Mobility, 0.15),
                (Speed, 0.10),
                (Stamina, 0.05),
            ],
            Position::WR => &[
                (Speed, 0.30),
                (Catching, 0.30),
                (RouteRunning, 0.25),
                (Stamina, 0.10),
                (Awareness, 0.05),
            ],
            Position::TE => &[
                (Catching, 0.25),
                (Strength, 0.20),
                (RouteRunning, 0.20),
                (Speed, 0.15),
                (Stamina, 0.10),
                (Awareness, 0.10),
            ],
            Position::RB => &[
                (Speed, 0.25),
                (Elusiveness, 0.25),
                (BallCarrying, 0.20),
                (Strength, 0.15),
                (Stamina, 0.10),
                (Awareness, 0.05),
            ],
            Position::LB => &[
                (Tackle, 0.30),
                (Pursuit, 0.25),
                (Strength, 0.20),
                (Awareness, 0.15),
                (Stamina, 0.10),
            ],
            Position::CB => &[
                (Coverage, 0.35),
                (Speed, 0.30),
                (Awareness, 0.20),
                (Tackle, 0.10),
                (Stamina, 0.05),
            ],
            Position::S => &[
                (Coverage, 0.25),
                (Awareness, 0.25),
                (Speed, 0.20),
                (Tackle, 0.20),
                (Stamina, 0.10),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Attribute {
    Speed,
    Strength,
    Stamina,
    Awareness,
    ThrowPower,
    ThrowAccuracy,
    Mobility,
    Catching,
    RouteRunning,
    BallCarrying,
    Elusiveness,
    Tackle,
    Coverage,
    Pursuit,
}

impl Attribute {
    pub fn all() -> [Attribute; NUM_ATTRIBUTES] {
        [
            Attribute::Speed,
            Attribute::Strength,
            Attribute::Stamina,
            Attribute::Awareness,
            Attribute::ThrowPower,
            Attribute::ThrowAccuracy,
            Attribute::Mobility,
            Attribute::Catching,
            Attribute::RouteRunning,
            Attribute::BallCarrying,
            Attribute::Elusiveness,
            Attribute::Tackle,
            Attribute::Coverage,
            Attribute::Pursuit,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Speed => "Speed",
            Attribute::Strength => "Strength",
            Attribute::Stamina => "Stamina",
            Attribute::Awareness => "Awareness",
            Attribute::ThrowPower => "Throw Power",
            Attribute::ThrowAccuracy => "Throw Accuracy",
            Attribute::Mobility => "Mobility",
            Attribute::Catching => "Catching",
            Attribute::RouteRunning => "Route Running",
            Attribute::BallCarrying => "Ball Carrying",
            Attribute::Elusiveness => "Elusiveness",
            Attribute::Tackle => "Tackle",
            Attribute::Coverage => "Coverage",
            Attribute::Pursuit => "Pursuit",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Training-point cost of the first upgrade above the base value.
    pub fn base_cost(&self) -> f64 {
        match self {
            Attribute::Speed => 15.0,
            Attribute::Strength => 12.0,
            Attribute::Stamina => 10.0,
            Attribute::Awareness => 20.0,
            Attribute::ThrowPower => 14.0,
            Attribute::ThrowAccuracy => 18.0,
            Attribute::Mobility => 13.0,
            Attribute::Catching => 14.0,
            Attribute::RouteRunning => 16.0,
            Attribute::BallCarrying => 13.0,
            Attribute::Elusiveness => 15.0,
            Attribute::Tackle => 13.0,
            Attribute::Coverage => 16.0,
            Attribute::Pursuit => 12.0,
        }
    }
}

/// One fixed-shape record valid for every position; attributes a position
/// does not weigh simply do not affect its rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self::uniform(BASE_ATTRIBUTE_VALUE)
    }

    pub fn uniform(value: u32) -> Self {
        Self {
            values: [value; NUM_ATTRIBUTES],
        }
    }

    /// Starting attributes for a new career: every attribute at
    /// `40 + legacy_bonus`, plus `round(weight * 20)` on position-relevant ones.
    pub fn starting(position: Position, legacy_bonus: u32) -> Self {
        let base = BASE_ATTRIBUTE_VALUE + legacy_bonus;
        let mut attrs = Self::uniform(base);
        for &(attr, weight) in position.weights() {
            let head_start = (weight * POSITION_HEAD_START).round() as u32;
            attrs.set(attr, base + head_start);
        }
        attrs
    }

    pub fn get(&self, attr: Attribute) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: Attribute, value: u32) {
        self.values[attr.index()] = value;
    }

    pub fn increment(&mut self, attr: Attribute) {
        self.add(attr, 1);
    }

    pub fn add(&mut self, attr: Attribute, amount: u32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }
}

/// Weighted rating clamped to [40, 99] and rounded.
pub fn compute_rating(position: Position, attrs: &Attributes) -> u32 {
    let mut total = 0.0;
    let mut weight_sum = 0.0;
    for &(attr, weight) in position.weights() {
        total += attrs.get(attr) as f64 * weight;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        return RATING_FALLBACK;
    }
    (total / weight_sum).clamp(RATING_MIN, RATING_MAX).round() as u32
}

/// Training-point cost to raise `attr` from `current_level` by one.
pub fn attribute_upgrade_cost(attr: Attribute, current_level: u32) -> f64 {
    let exponent = current_level as f64 - BASE_ATTRIBUTE_VALUE as f64;
    (attr.base_cost() * ATTRIBUTE_COST_GROWTH.powf(exponent)).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_for_every_position() {
        for position in Position::ALL {
            let sum: f64 = position.weights().iter().map(|(_, w)| w).sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "{:?} weights sum to {}",
                position,
                sum
            );
        }
    }

    #[test]
    fn test_rating_clamped_for_extreme_inputs() {
        for position in Position::ALL {
            assert_eq!(compute_rating(position, &Attributes::uniform(0)), 40);
            assert_eq!(compute_rating(position, &Attributes::uniform(99)), 99);
            assert_eq!(compute_rating(position, &Attributes::uniform(500)), 99);
        }
    }

    #[test]
    fn test_rating_is_weighted_average() {
        let mut attrs = Attributes::uniform(50);
        attrs.set(Attribute::ThrowAccuracy, 80);
        // 50 + 0.30 * 30 = 59
        assert_eq!(compute_rating(Position::QB, &attrs), 59);
        // Throw accuracy carries no weight for a linebacker
        assert_eq!(compute_rating(Position::LB, &attrs), 50);
    }

    #[test]
    fn test_starting_attributes_head_start() {
        let attrs = Attributes::starting(Position::QB, 0);
        assert_eq!(attrs.get(Attribute::ThrowAccuracy), 46);
        assert_eq!(attrs.get(Attribute::ThrowPower), 44);
        assert_eq!(attrs.get(Attribute::Stamina), 41);
        assert_eq!(attrs.get(Attribute::Tackle), 40);
    }

    #[test]
    fn test_starting_attributes_include_legacy_bonus() {
        let attrs = Attributes::starting(Position::CB, 4);
        assert_eq!(attrs.get(Attribute::Coverage), 44 + 7);
        assert_eq!(attrs.get(Attribute::Catching), 44);
    }

    #[test]
    fn test_upgrade_cost_strictly_increasing() {
        for attr in Attribute::all() {
            let mut previous = attribute_upgrade_cost(attr, 40);
            assert_eq!(previous, attr.base_cost());
            for level in 41..99 {
                let cost = attribute_upgrade_cost(attr, level);
                assert!(
                    cost > previous,
                    "{:?} cost did not increase at level {}",
                    attr,
                    level
                );
                previous = cost;
            }
        }
    }

    #[test]
    fn test_position_from_code() {
        assert_eq!(Position::from_code("qb"), Some(Position::QB));
        assert_eq!(Position::from_code("S"), Some(Position::S));
        assert_eq!(Position::from_code("K"), None);
    }
}
