//! Money flows outside of match rewards: contracts and endorsements.

pub mod contract;
pub mod endorsement;

pub use contract::*;
pub use endorsement::*;
