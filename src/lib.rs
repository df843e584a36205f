//! Gridiron - Idle Football Career Library
//!
//! This module exposes the career simulation for the binaries, the balance
//! simulator and integration tests.

pub mod catalog;
pub mod character;
pub mod commands;
pub mod core;
pub mod economy;
pub mod matches;
pub mod season;
pub mod simulator;
pub mod training;
pub mod upgrades;
pub mod utils;
