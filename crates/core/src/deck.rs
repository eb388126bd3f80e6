//! Deck module - paired, shuffled card generation
//!
//! A deck is built in three steps:
//!
//! 1. Draw distinct picture ids uniformly from `1..=max_pictures` until half the
//!    board is covered.
//! 2. Duplicate the drawn ids so every picture appears exactly twice.
//! 3. Fisher-Yates shuffle the whole sequence.
//!
//! The RNG is seeded ChaCha8, so a seed always reproduces the same deck.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{GameError, PairId};

/// Seeded random source for dealing decks.
#[derive(Debug, Clone)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform picture id in `1..=max`.
    pub fn next_picture(&mut self, max: PairId) -> PairId {
        self.inner.gen_range(1..=max)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            slice.swap(i, j);
        }
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Deal `total_cards` pair ids drawn from `max_pictures` pictures.
///
/// Fails with [`GameError::InvalidDifficultyConfig`] when `total_cards` is zero
/// or odd, or when more pairs are requested than there are pictures.
pub fn generate_deck(
    total_cards: usize,
    max_pictures: PairId,
    rng: &mut DeckRng,
) -> Result<Vec<PairId>, GameError> {
    let pairs = total_cards / 2;
    if total_cards == 0 || total_cards % 2 != 0 || pairs > max_pictures as usize {
        return Err(GameError::InvalidDifficultyConfig {
            total_cards,
            max_pictures,
        });
    }

    let mut seen = [false; PairId::MAX as usize + 1];
    let mut ids: Vec<PairId> = Vec::with_capacity(total_cards);
    while ids.len() < pairs {
        let id = rng.next_picture(max_pictures);
        if seen[id as usize] {
            continue;
        }
        seen[id as usize] = true;
        ids.push(id);
    }

    ids.extend_from_within(..);
    rng.shuffle(&mut ids);
    Ok(ids)
}
