//! Season phases, weekly games, playoffs and awards.

pub mod awards;
pub mod logic;
pub mod types;

pub use awards::*;
pub use logic::*;
pub use types::*;
