//! Scoring module - move counting and star rating
//!
//! One move is one completed turn (two cards turned over), whether it matched
//! or not. The rating only depends on the move count and the difficulty:
//!
//! | Moves | Stars |
//! |-------|-------|
//! | `moves <= t` | 3 |
//! | `t < moves <= 1.5 * t` | 2 |
//! | otherwise | 1 |
//!
//! where `t` is [`Difficulty::star_threshold`].

use crate::types::{Difficulty, MAX_STARS};

/// Star rating for a move count.
///
/// The 1.5x bound is compared as `2 * moves <= 3 * t` to stay in integers.
pub fn stars_for(moves: u32, difficulty: Difficulty) -> u8 {
    let t = difficulty.star_threshold();
    if moves <= t {
        MAX_STARS
    } else if moves.saturating_mul(2) <= t.saturating_mul(3) {
        2
    } else {
        1
    }
}

/// Completed-turn counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveCounter {
    moves: u32,
}

impl MoveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed turn and return the new total.
    pub fn record_move(&mut self) -> u32 {
        self.moves = self.moves.saturating_add(1);
        self.moves
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn reset(&mut self) {
        self.moves = 0;
    }
}
