//! Random scramble generation.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::{Axis, Layer, Move};

/// Number of moves in a scramble unless otherwise requested.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Moves a scramble draws from: quarter turns of every face and slice.
const SCRAMBLE_MOVES: [Move; 18] = {
    let mut moves = [Move::cw(Layer::U); 18];
    let mut i = 0;
    while i < Layer::TURNS.len() {
        moves[2 * i] = Move::cw(Layer::TURNS[i]);
        moves[2 * i + 1] = Move::ccw(Layer::TURNS[i]);
        i += 1;
    }
    moves
};

/// Generates random move sequences.
///
/// The same seed always produces the same scrambles.
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: ChaCha8Rng,
    seed: u64,
    length: usize,
}

impl Scrambler {
    /// Constructs a scrambler with a random seed.
    pub fn new(length: usize) -> Self {
        Self::from_seed(rand::rng().random(), length)
    }

    pub fn from_seed(seed: u64, length: usize) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            length,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the next scramble.
    ///
    /// Consecutive moves never share an axis, so no move cancels or merges
    /// with the one before it.
    pub fn next_scramble(&mut self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.length);
        let mut last_axis: Option<Axis> = None;

        while moves.len() < self.length {
            let Some(&mv) = SCRAMBLE_MOVES.choose(&mut self.rng) else {
                break;
            };
            // redraw until the axis changes
            if Some(mv.layer.axis()) == last_axis {
                continue;
            }
            last_axis = Some(mv.layer.axis());
            moves.push(mv);
        }

        log::debug!("generated {}-move scramble", moves.len());
        moves
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new(DEFAULT_SCRAMBLE_LENGTH)
    }
}
