//! Simulation configuration.

use crate::character::attributes::Position;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Careers played back to back in one run, each retiring into the next
    pub careers_per_run: u32,

    /// Season in which each career retires (never earlier than retirement allows)
    pub seasons_per_career: u32,

    /// Fixed position for every career (None = rotate through all positions)
    pub position: Option<Position>,

    /// Safety cap on one-second ticks per career
    pub max_ticks_per_career: u64,

    /// Whether the simulated player buys upgrades and drills
    pub auto_shop: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            careers_per_run: 3,
            seasons_per_career: 5,
            position: None,
            max_ticks_per_career: 500_000,
            auto_shop: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short single-career runs for a quick balance check
    pub fn quick() -> Self {
        Self {
            num_runs: 20,
            careers_per_run: 1,
            seasons_per_career: 3,
            ..Default::default()
        }
    }

    /// Long legacies to see how prestige bonuses compound
    pub fn legacy_test() -> Self {
        Self {
            num_runs: 20,
            careers_per_run: 6,
            seasons_per_career: 8,
            ..Default::default()
        }
    }

    /// Position used for career `index` within a run.
    pub fn position_for(&self, index: u32) -> Position {
        self.position
            .unwrap_or(Position::ALL[index as usize % Position::ALL.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_rotate_without_override() {
        let config = SimConfig::default();
        assert_eq!(config.position_for(0), Position::ALL[0]);
        assert_eq!(config.position_for(1), Position::ALL[1]);
        assert_eq!(
            config.position_for(Position::ALL.len() as u32),
            Position::ALL[0]
        );
    }

    #[test]
    fn test_fixed_position() {
        let config = SimConfig {
            position: Some(Position::S),
            ..Default::default()
        };
        assert_eq!(config.position_for(4), Position::S);
    }
}
