//! Terminal presentation for a session.
//!
//! The view turns a [`core::SessionSnapshot`] into styled lines without any
//! I/O; the renderer flushes those lines to the terminal with crossterm.

pub mod renderer;
pub mod text;
pub mod view;

pub use piece_reserve_core as core;
pub use piece_reserve_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use text::{Line, Rgb, Span};
pub use view::{piece_color, SessionView, StatusMessage};
