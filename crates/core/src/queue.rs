//! Queue module - fixed-capacity circular buffer of upcoming pieces
//!
//! Slots live in a fixed array; `front` points at the oldest piece and the
//! logical offset `i` maps to physical slot `(front + i) % QUEUE_CAPACITY`.

use crate::types::{Container, Piece, ReserveError, ReserveResult, QUEUE_CAPACITY};

/// FIFO ring of upcoming pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        (self.front + offset) % QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// A full queue rejects the piece with `CapacityExceeded` instead of
    /// dropping it.
    pub fn enqueue(&mut self, piece: Piece) -> ReserveResult<()> {
        if self.is_full() {
            return Err(ReserveError::CapacityExceeded {
                container: Container::Queue,
                capacity: QUEUE_CAPACITY,
            });
        }
        let back = self.slot(self.len);
        self.slots[back] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    pub fn dequeue(&mut self) -> ReserveResult<Piece> {
        let piece = self.peek_front()?;
        self.slots[self.front] = None;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Front piece without removing it
    pub fn peek_front(&self) -> ReserveResult<Piece> {
        self.get(0).ok_or(ReserveError::EmptyContainer {
            container: Container::Queue,
        })
    }

    /// Piece at logical offset from the front.
    pub fn get(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot(offset)]
    }

    /// Mutable slot at logical offset from the front (for in-place exchange).
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot(offset);
        self.slots[idx].as_mut()
    }

    /// Iterate pieces front to back without consuming them.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<Piece> {
        self.iter().collect()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over a [`PieceQueue`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    queue: &'a PieceQueue,
    offset: usize,
}

impl Iterator for Iter<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        let piece = self.queue.get(self.offset)?;
        self.offset += 1;
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len.saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
