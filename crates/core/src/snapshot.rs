use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::types::{CardId, CardStatus, ClockDisplay, Difficulty, PairId, Stage, MAX_CARDS, MAX_STARS};

/// Stable 64-bit FNV-1a hasher for snapshot fingerprints.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub pair: PairId,
    pub status: CardStatus,
}

/// Render-facing view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: ArrayVec<CardSnapshot, MAX_CARDS>,
    /// Grid width; 0 before a difficulty is chosen.
    pub columns: u8,
    pub stage: Stage,
    pub difficulty: Option<Difficulty>,
    /// Empty before a category is chosen.
    pub category: String,
    pub pending: Option<CardId>,
    pub moves: u32,
    pub stars: u8,
    pub time: ClockDisplay,
    pub finished: bool,
    pub generation: u32,
    pub seed: u64,
    pub resets_in_flight: u8,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.columns = 0;
        self.stage = Stage::ChoosingDifficulty;
        self.difficulty = None;
        self.category.clear();
        self.pending = None;
        self.moves = 0;
        self.stars = MAX_STARS;
        self.time = ClockDisplay::default();
        self.finished = false;
        self.generation = 0;
        self.seed = 0;
        self.resets_in_flight = 0;
    }

    /// Rows needed to lay the cards out in `columns` columns.
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.cards.len().div_ceil(self.columns as usize)
    }

    pub fn playable(&self) -> bool {
        self.stage == Stage::Playing
    }

    /// Stable hash of everything a renderer shows.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cards: ArrayVec::new(),
            columns: 0,
            stage: Stage::ChoosingDifficulty,
            difficulty: None,
            category: String::new(),
            pending: None,
            moves: 0,
            stars: MAX_STARS,
            time: ClockDisplay::default(),
            finished: false,
            generation: 0,
            seed: 0,
            resets_in_flight: 0,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let s = GameSnapshot::default();
        assert!(s.cards.is_empty());
        assert_eq!(s.rows(), 0);
        assert_eq!(s.stars, 3);
        assert!(!s.playable());
    }

    #[test]
    fn test_rows() {
        let mut s = GameSnapshot::default();
        for _ in 0..16 {
            s.cards.push(CardSnapshot {
                pair: 1,
                status: CardStatus::Hidden,
            });
        }
        s.columns = 4;
        assert_eq!(s.rows(), 4);
    }

    #[test]
    fn test_fingerprint_tracks_changes() {
        let a = GameSnapshot::default();
        let mut b = GameSnapshot::default();
        assert_eq!(a.fingerprint(), b.fingerprint());

        b.moves = 1;
        assert_ne!(a.fingerprint(), b.fingerprint());

        b.clear();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
