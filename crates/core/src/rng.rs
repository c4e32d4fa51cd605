//! RNG module - piece generation
//!
//! Pieces get a kind drawn uniformly from [`PieceKind::ALL`] and an id taken
//! from an exclusively owned [`PieceCounter`]. The generator is a small LCG so
//! a seed fully determines the piece sequence, which keeps sessions
//! reproducible in tests.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Monotonic id source for one session.
///
/// Every call to [`PieceCounter::next_id`] returns the current value and
/// advances by exactly one. Ids are `u64` so they never wrap within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounter {
    next: u64,
}

impl PieceCounter {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// The id the next generated piece will get.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Random piece generator
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
}

impl PieceFactory {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate a piece with a random kind and the counter's next id.
    pub fn generate(&mut self, counter: &mut PieceCounter) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Piece::new(kind, counter.next_id())
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
