//! Piece reserve (workspace facade crate).
//!
//! Re-exports the member crates under stable module names and carries the
//! application-level configuration used by the binary.

pub mod config;

pub use piece_reserve_core as core;
pub use piece_reserve_input as input;
pub use piece_reserve_term as term;
pub use piece_reserve_types as types;

use crossterm::event::KeyEvent;
use log::debug;

use crate::core::Session;
use crate::input::handle_key_event;
use crate::term::StatusMessage;

/// Apply the command bound to `key`, or report an invalid option.
///
/// Quit keys are not handled here; check [`input::should_quit`] first.
pub fn status_after_key(session: &mut Session, key: KeyEvent) -> StatusMessage {
    match handle_key_event(key) {
        Some(command) => StatusMessage::from(session.apply(command)),
        None => {
            debug!("unmapped key: {:?}", key.code);
            StatusMessage::InvalidOption
        }
    }
}
