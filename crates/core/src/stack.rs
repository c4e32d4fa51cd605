//! Stack module - fixed-capacity LIFO of reserved pieces

use arrayvec::ArrayVec;

use crate::types::{Container, Piece, ReserveError, ReserveResult, STACK_CAPACITY};

/// Reserved pieces, top = most recently pushed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceStack {
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl PieceStack {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn push(&mut self, piece: Piece) -> ReserveResult<()> {
        self.items
            .try_push(piece)
            .map_err(|_| ReserveError::CapacityExceeded {
                container: Container::Stack,
                capacity: STACK_CAPACITY,
            })
    }

    pub fn pop(&mut self) -> ReserveResult<Piece> {
        self.items.pop().ok_or(ReserveError::EmptyContainer {
            container: Container::Stack,
        })
    }

    pub fn peek_top(&self) -> ReserveResult<Piece> {
        self.items.last().copied().ok_or(ReserveError::EmptyContainer {
            container: Container::Stack,
        })
    }

    /// Piece `offset` positions below the top (0 = top).
    pub fn get_from_top(&self, offset: usize) -> Option<Piece> {
        let idx = self.items.len().checked_sub(offset)?.checked_sub(1)?;
        self.items.get(idx).copied()
    }

    pub(crate) fn get_mut_from_top(&mut self, offset: usize) -> Option<&mut Piece> {
        let idx = self.items.len().checked_sub(offset)?.checked_sub(1)?;
        self.items.get_mut(idx)
    }

    /// Iterate pieces top to base without consuming them.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Piece> + '_ {
        self.items.iter().rev().copied()
    }

    pub fn to_vec(&self) -> Vec<Piece> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_push_pop_is_lifo() {
        let a = Piece::new(PieceKind::I, 0);
        let b = Piece::new(PieceKind::O, 1);
        let c = Piece::new(PieceKind::T, 2);

        let mut s = PieceStack::new();
        s.push(a).unwrap();
        s.push(b).unwrap();
        s.push(c).unwrap();

        assert_eq!(s.pop(), Ok(c));
        assert_eq!(s.pop(), Ok(b));
        assert_eq!(s.len(), 1);
        assert_eq!(s.peek_top(), Ok(a));
    }

    #[test]
    fn test_push_on_full_stack_is_rejected() {
        let mut s = PieceStack::new();
        for id in 0..STACK_CAPACITY as u64 {
            s.push(Piece::new(PieceKind::L, id)).unwrap();
        }
        assert!(s.is_full());

        let before = s.clone();
        assert_eq!(
            s.push(Piece::new(PieceKind::I, 9)),
            Err(ReserveError::CapacityExceeded {
                container: Container::Stack,
                capacity: STACK_CAPACITY
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_empty_pop_and_peek_report_error() {
        let mut s = PieceStack::new();
        let empty = ReserveError::EmptyContainer {
            container: Container::Stack,
        };
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(empty));
        assert_eq!(s.peek_top(), Err(empty));
    }

    #[test]
    fn test_iter_goes_top_to_base() {
        let mut s = PieceStack::new();
        for id in 0..3 {
            s.push(Piece::new(PieceKind::T, id)).unwrap();
        }
        let ids: Vec<u64> = s.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![2, 1, 0]);
        assert_eq!(s.iter().len(), 3);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_get_from_top_bounds() {
        let mut s = PieceStack::new();
        s.push(Piece::new(PieceKind::I, 0)).unwrap();
        s.push(Piece::new(PieceKind::O, 1)).unwrap();

        assert_eq!(s.get_from_top(0).map(|p| p.id()), Some(1));
        assert_eq!(s.get_from_top(1).map(|p| p.id()), Some(0));
        assert_eq!(s.get_from_top(2), None);
        assert!(s.get_mut_from_top(2).is_none());
    }
}
