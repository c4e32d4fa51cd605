//! Core types - shared data structures, capacities and error taxonomy
//!
//! Everything here is plain data with no I/O, usable from the container logic,
//! the terminal view and the key mapping alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces, kept full once a session starts |
//! | `STACK_CAPACITY` | 3 | Reserved pieces |
//! | `BULK_SWAP_COUNT` | 3 | Pieces exchanged by a bulk swap |
//!
//! # Examples
//!
//! ```
//! use piece_reserve_types::{Command, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
//! assert_eq!(Command::from_str("reserve"), Some(Command::Reserve));
//! assert_eq!(Command::from_str("5"), Some(Command::SwapBulk));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

use thiserror::Error;

/// Maximum number of upcoming pieces held by the queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Maximum number of reserved pieces held by the stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by [`Command::SwapBulk`].
pub const BULK_SWAP_COUNT: usize = 3;

/// The piece alphabet.
///
/// - **I**: straight bar
/// - **O**: square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in the fixed order used by the random generator.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_reserve_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with a kind and a session-unique id.
///
/// Fields are private: a piece is fixed at creation and only ever copied
/// between containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Which container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Queue,
    Stack,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => f.write_str("queue"),
            Container::Stack => f.write_str("stack"),
        }
    }
}

/// Recoverable conditions reported by container and exchange operations.
///
/// Whenever one of these is returned the containers are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    #[error("the {container} is empty")]
    EmptyContainer { container: Container },

    #[error("the {container} is full ({capacity} pieces)")]
    CapacityExceeded {
        container: Container,
        capacity: usize,
    },

    #[error(
        "not enough pieces to swap {required}: queue has {queue_len}, stack has {stack_len}"
    )]
    PreconditionFailed {
        required: usize,
        queue_len: usize,
        stack_len: usize,
    },
}

pub type ReserveResult<T> = Result<T, ReserveError>;

/// Commands the orchestrator can issue against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Consume the queue front and refill the queue
    Play,
    /// Move the queue front onto the stack and refill the queue
    Reserve,
    /// Consume the stack top
    UseReserved,
    /// Exchange queue front with stack top
    SwapTop,
    /// Exchange the first three queue pieces with the three stacked pieces
    SwapBulk,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Play,
        Command::Reserve,
        Command::UseReserved,
        Command::SwapTop,
        Command::SwapBulk,
    ];

    /// Parse a command name or menu number (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_reserve_types::Command;
    ///
    /// assert_eq!(Command::from_str("play"), Some(Command::Play));
    /// assert_eq!(Command::from_str("useReserved"), Some(Command::UseReserved));
    /// assert_eq!(Command::from_str("4"), Some(Command::SwapTop));
    /// assert_eq!(Command::from_str("0"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "play" => Some(Command::Play),
            "2" | "reserve" => Some(Command::Reserve),
            "3" | "use" | "usereserved" => Some(Command::UseReserved),
            "4" | "swap" | "swaptop" => Some(Command::SwapTop),
            "5" | "bulk" | "swapbulk" => Some(Command::SwapBulk),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "useReserved",
            Command::SwapTop => "swapTop",
            Command::SwapBulk => "swapBulk",
        }
    }

    /// Menu number (1-5).
    pub fn menu_key(&self) -> char {
        match self {
            Command::Play => '1',
            Command::Reserve => '2',
            Command::UseReserved => '3',
            Command::SwapTop => '4',
            Command::SwapBulk => '5',
        }
    }

    /// Menu label shown next to [`Command::menu_key`].
    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "Play the front piece",
            Command::Reserve => "Reserve the front piece",
            Command::UseReserved => "Use the reserved piece",
            Command::SwapTop => "Swap queue front with stack top",
            Command::SwapBulk => "Swap first 3 of queue with the stack",
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    SwappedTop {
        /// Former queue front, now on top of the stack.
        to_stack: Piece,
        /// Former stack top, now at the queue front.
        to_queue: Piece,
    },
    SwappedBulk { count: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(p) => write!(f, "Piece {p} played from the queue."),
            Outcome::Reserved(p) => write!(f, "Piece {p} moved from the queue to the stack."),
            Outcome::UsedReserved(p) => write!(f, "Piece {p} used from the stack."),
            Outcome::SwappedTop { to_stack, to_queue } => write!(
                f,
                "Queue front {to_stack} swapped with stack top {to_queue}."
            ),
            Outcome::SwappedBulk { count } => write!(
                f,
                "First {count} pieces of the queue swapped with the top {count} of the stack."
            ),
        }
    }
}
