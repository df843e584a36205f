//! Utility modules: save file locations.

pub mod persistence;
