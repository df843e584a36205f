//! Game balance simulator for Monte Carlo analysis.
//!
//! Runs whole careers headlessly to analyze:
//! - Win and playoff rates as ratings grow
//! - Award frequency per career
//! - Rating reached by retirement for each position
//! - How legacy bonuses compound across careers
//!
//! The simulator drives CareerLoop (src/core/game_loop.rs) for all game
//! logic, so simulation results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, CareerStats, RunStats};
