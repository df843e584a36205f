//! The player, their attributes and rating, and the cross-career legacy.

#![allow(unused_imports)]

pub mod attributes;
pub mod player;
pub mod prestige;

pub use attributes::*;
pub use player::*;
pub use prestige::*;
