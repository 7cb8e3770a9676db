use crate::cube::Cube;
use crate::moves::Move;
use log::info;
use rand::{seq::SliceRandom, thread_rng, Rng};

/// Scramble length used when none is configured.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

impl Cube {
    /// Applies `count` uniformly random recorded moves using the thread RNG.
    pub fn scramble(&mut self, count: usize) -> Vec<Move> {
        self.scramble_with(count, &mut thread_rng())
    }

    /// Same as [`Cube::scramble`] with a caller-supplied RNG. Consecutive picks may repeat
    /// or cancel each other; every pick is recorded so it can be undone individually.
    pub fn scramble_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Move> {
        let mut applied = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(&mv) = Move::ALL.choose(rng) {
                self.rotate(mv, true);
                applied.push(mv);
            }
        }
        info!("scrambled with {} moves", applied.len());
        applied
    }
}
