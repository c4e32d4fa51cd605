//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s for the menu
//! loop. Independent of any rendering.

pub mod map;

pub use piece_reserve_types as types;

pub use map::{handle_key_event, should_quit};
