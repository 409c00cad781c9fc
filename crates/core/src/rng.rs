//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability and hands
//! out a fresh copy of its template. There is no bag and no history: repeats
//! are allowed.
//!
//! Seeded through [`rand::rngs::StdRng`] so that a session can be replayed
//! from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shapes::Shape;
use crate::types::PieceKind;

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: StdRng,
    seed: u64,
}

impl PieceFactory {
    /// Create a new factory with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a kind uniformly among the seven.
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Fresh, independently owned shape of a uniformly chosen kind.
    pub fn next_random_shape(&mut self) -> Shape {
        Shape::template(self.next_kind())
    }

    /// Seed this factory was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
