//! Piece generation with a one-piece look-ahead
//!
//! Pieces are drawn uniformly with replacement. There is no 7-bag, so
//! droughts and repeats are possible. The random source is injectable so a
//! seeded game always deals the same sequence.

use crate::piece::Piece;
use crate::tetromino::TetrominoType;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deals active pieces and keeps the next one visible
#[derive(Debug, Clone)]
pub struct PieceSpawner<R = ChaCha8Rng> {
    rng: R,
    next: TetrominoType,
}

impl PieceSpawner<ChaCha8Rng> {
    /// Reproducible spawner for a given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Spawner seeded from the OS
    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> PieceSpawner<R> {
    /// Build a spawner on top of any random source
    pub fn with_rng(mut rng: R) -> Self {
        let next = draw(&mut rng);
        Self { rng, next }
    }

    /// Kind of the piece the next call to `next` will return
    pub fn peek_next(&self) -> TetrominoType {
        self.next
    }

    /// Promote the look-ahead to a spawned piece and draw a new look-ahead
    pub fn next(&mut self) -> Piece {
        let kind = std::mem::replace(&mut self.next, draw(&mut self.rng));
        Piece::new(kind)
    }
}

fn draw<R: Rng>(rng: &mut R) -> TetrominoType {
    let all = TetrominoType::all();
    all[rng.gen_range(0..all.len())]
}
