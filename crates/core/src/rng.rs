//! RNG module - sources of spawn kinds
//!
//! The board never picks kinds itself; it asks a [`KindSource`]. The contract is
//! "uniform over the seven tetrominoes, never `None`".
//!
//! - [`SimpleRng`]: seeded LCG, the default source for real games
//! - [`FixedSequence`]: repeats a scripted list, for tests and replays

use crate::types::PieceKind;

/// Provider of the next spawn kind.
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state (usable as a seed to replay from here)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::SHAPES[self.next_range(PieceKind::SHAPES.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl FixedSequence {
    /// # Panics
    ///
    /// Panics if `kinds` is empty or contains `PieceKind::None`.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        assert!(!kinds.is_empty(), "sequence needs at least one kind");
        assert!(
            kinds.iter().all(|k| !k.is_none()),
            "sequence must not contain None"
        );
        Self { kinds, pos: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl KindSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}

impl<S: KindSource + ?Sized> KindSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
