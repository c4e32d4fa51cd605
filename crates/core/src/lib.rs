//! Core piece-supply logic - pure, deterministic, and testable
//!
//! This crate holds the containers and the rules for moving pieces between
//! them. It performs no terminal or file I/O; outcomes and failures are
//! returned to the caller, and diagnostics only go through the `log` facade.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded generator, id counter and piece factory
//! - [`queue`]: fixed-capacity circular queue of upcoming pieces
//! - [`stack`]: fixed-capacity stack of reserved pieces
//! - [`exchange`]: play, reserve, use, single swap and bulk swap
//! - [`session`]: owns one queue, stack and counter and applies commands
//! - [`snapshot`]: read-only copy of a session for views
//! - [`config`]: session seeding options
//!
//! # Rules
//!
//! - The queue is filled to capacity at start-up and every piece taken from
//!   it is replaced by a freshly generated one.
//! - Ids increase strictly in creation order.
//! - A rejected operation leaves both containers exactly as they were.
//!
//! # Example
//!
//! ```
//! use piece_reserve_core::{Session, SessionConfig};
//! use piece_reserve_types::{Command, Outcome, ReserveError};
//!
//! let mut session = Session::new(&SessionConfig { seed: 7, preseed_stack: false });
//!
//! let front = session.queue().peek_front().unwrap();
//! assert_eq!(session.apply(Command::Reserve), Ok(Outcome::Reserved(front)));
//! assert_eq!(session.queue().len(), 5);
//! assert_eq!(session.stack().len(), 1);
//!
//! // Bulk swap needs three reserved pieces.
//! assert!(matches!(
//!     session.apply(Command::SwapBulk),
//!     Err(ReserveError::PreconditionFailed { .. })
//! ));
//! ```

pub mod config;
pub mod exchange;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use piece_reserve_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use queue::PieceQueue;
pub use rng::{PieceCounter, PieceFactory, SimpleRng};
pub use session::Session;
pub use snapshot::SessionSnapshot;
pub use stack::PieceStack;
