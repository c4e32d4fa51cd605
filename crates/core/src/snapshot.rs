use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Read-only copy of a session for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Front to back.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top to base.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    pub next_id: u64,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.stack.clear();
        self.next_id = 0;
    }

    pub fn stack_is_full(&self) -> bool {
        self.stack.is_full()
    }
}
