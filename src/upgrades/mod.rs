//! Upgrade shop: purchase validation, effect application and listings.
//!
//! Slot, attribute and drill-multiplier effects are applied when bought.
//! Match bonuses and passive income are summed by their consumers when needed.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
