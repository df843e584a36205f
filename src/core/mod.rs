//! Core career state, persistence and the tick driver.

#![allow(unused_imports)]

pub mod constants;
pub mod error;
pub mod game_loop;
pub mod game_state;
pub mod offline;
pub mod save;

pub use constants::*;
pub use error::*;
pub use game_loop::*;
pub use game_state::*;
pub use offline::*;
pub use save::*;
