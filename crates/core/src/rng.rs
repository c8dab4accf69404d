//! RNG module - deterministic piece generation
//!
//! A small LCG drives everything random in the game: the kind of each new piece
//! and the tint it is drawn with. The generator is owned by the game and passed
//! explicitly, so the same seed always yields the same game.

use crate::types::{PieceKind, Tint, TINT_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would repeat the increment forever.
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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Picks the kind and tint of every new piece.
///
/// Tint is drawn first, then kind, so a fixed seed produces the same pairs.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
    repeat: Option<PieceKind>,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            repeat: None,
        }
    }

    /// Always hand out `kind` (tints stay random).
    pub fn with_repeat(mut self, kind: Option<PieceKind>) -> Self {
        self.repeat = kind;
        self
    }

    pub fn repeat(&self) -> Option<PieceKind> {
        self.repeat
    }

    pub fn next_tint(&mut self) -> Tint {
        Tint(self.rng.next_range(u32::from(TINT_COUNT)) as u8)
    }

    /// Uniform over the seven kinds unless a repeat kind is set.
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        self.repeat.unwrap_or(PieceKind::ALL[idx])
    }

    /// Tint then kind for the next piece.
    pub fn next_piece(&mut self) -> (PieceKind, Tint) {
        let tint = self.next_tint();
        let kind = self.next_kind();
        (kind, tint)
    }
}
