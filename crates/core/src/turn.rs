//! Turn resolver - the selection state machine
//!
//! ```text
//!          select(a)                 select(b), same picture -> Matched
//!   Idle ───────────▶ Pending(a) ─────────────────────────────────────▶ Idle
//!                         │       select(b), other picture -> Mismatch
//!                         └───────────────────────────────────────────▶ Idle
//! ```
//!
//! Matched cards and re-selecting the face-up pending card are ignored; a
//! pending card that was swept face down is turned up again. The resolver
//! never ends on its own; finishing a game is the session's job.

use crate::board::Board;
use crate::types::{CardId, CardStatus};

/// Whether a card is waiting for its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TurnState {
    #[default]
    Idle,
    Pending(CardId),
}

/// Why a selection had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    AlreadyMatched,
    SameCard,
    UnknownCard,
    /// No board is in play (menus, or the game is finished).
    NotPlaying,
}

/// Result of a single selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    Ignored(IgnoreReason),
    /// First card of a turn is now face up.
    FirstRevealed(CardId),
    /// Both cards show the same picture and are locked.
    Matched { first: CardId, second: CardId },
    /// Pictures differ; the cards flip back after the mismatch delay.
    Mismatch { first: CardId, second: CardId },
}

impl TurnOutcome {
    /// True when the selection closed a turn (counts as one move).
    pub fn completes_turn(&self) -> bool {
        matches!(self, TurnOutcome::Matched { .. } | TurnOutcome::Mismatch { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TurnResolver {
    state: TurnState,
}

impl TurnResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn pending(&self) -> Option<CardId> {
        match self.state {
            TurnState::Idle => None,
            TurnState::Pending(id) => Some(id),
        }
    }

    /// Drop any pending card.
    pub fn reset(&mut self) {
        self.state = TurnState::Idle;
    }

    /// Feed one card selection through the state machine.
    pub fn select(&mut self, board: &mut Board, id: CardId) -> TurnOutcome {
        let Some(card) = board.get(id).copied() else {
            return TurnOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if card.status == CardStatus::Matched {
            return TurnOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        match self.state {
            TurnState::Idle => {
                // Cannot fail: the card exists and is not matched.
                let _ = board.reveal(id);
                self.state = TurnState::Pending(id);
                TurnOutcome::FirstRevealed(id)
            }
            TurnState::Pending(pending) if pending == id => {
                if card.status == CardStatus::Hidden {
                    let _ = board.reveal(id);
                    TurnOutcome::FirstRevealed(id)
                } else {
                    TurnOutcome::Ignored(IgnoreReason::SameCard)
                }
            }
            TurnState::Pending(pending) => {
                let _ = board.reveal(id);
                self.state = TurnState::Idle;

                let same_picture = board.get(pending).map(|c| c.pair) == Some(card.pair);
                if same_picture && board.mark_matched(pending, id).is_ok() {
                    TurnOutcome::Matched {
                        first: pending,
                        second: id,
                    }
                } else {
                    TurnOutcome::Mismatch {
                        first: pending,
                        second: id,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        // 0 and 2 share picture 3; 1 and 3 share picture 7.
        Board::from_pairs(&[3, 7, 3, 7])
    }

    #[test]
    fn test_first_selection_goes_pending() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        assert_eq!(turn.select(&mut b, 1), TurnOutcome::FirstRevealed(1));
        assert_eq!(turn.state(), TurnState::Pending(1));
        assert_eq!(b.status(1), Some(CardStatus::Revealed));
    }

    #[test]
    fn test_matching_pair() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 0);
        let out = turn.select(&mut b, 2);
        assert_eq!(out, TurnOutcome::Matched { first: 0, second: 2 });
        assert!(out.completes_turn());
        assert_eq!(turn.state(), TurnState::Idle);
        assert_eq!(b.status(0), Some(CardStatus::Matched));
        assert_eq!(b.status(2), Some(CardStatus::Matched));
    }

    #[test]
    fn test_mismatch_returns_to_idle_immediately() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 0);
        let out = turn.select(&mut b, 1);
        assert_eq!(out, TurnOutcome::Mismatch { first: 0, second: 1 });
        assert_eq!(turn.state(), TurnState::Idle);

        // Both stay face up until the delayed reset runs.
        assert_eq!(b.status(0), Some(CardStatus::Revealed));
        assert_eq!(b.status(1), Some(CardStatus::Revealed));
    }

    #[test]
    fn test_reselecting_pending_card_is_ignored() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 3);
        let out = turn.select(&mut b, 3);
        assert_eq!(out, TurnOutcome::Ignored(IgnoreReason::SameCard));
        assert!(!out.completes_turn());
        assert_eq!(turn.state(), TurnState::Pending(3));
    }

    #[test]
    fn test_matched_cards_are_ignored() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 0);
        turn.select(&mut b, 2);

        assert_eq!(
            turn.select(&mut b, 0),
            TurnOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(turn.state(), TurnState::Idle);

        // Also ignored as a second pick.
        turn.select(&mut b, 1);
        assert_eq!(
            turn.select(&mut b, 2),
            TurnOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(turn.state(), TurnState::Pending(1));
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut b = board();
        let mut turn = TurnResolver::new();
        assert_eq!(
            turn.select(&mut b, 200),
            TurnOutcome::Ignored(IgnoreReason::UnknownCard)
        );
        assert_eq!(turn.state(), TurnState::Idle);
    }

    #[test]
    fn test_pending_card_swept_face_down_can_still_match() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 0);
        b.reset_unmatched_to_hidden();
        assert_eq!(b.status(0), Some(CardStatus::Hidden));

        assert_eq!(
            turn.select(&mut b, 2),
            TurnOutcome::Matched { first: 0, second: 2 }
        );
        assert_eq!(b.status(0), Some(CardStatus::Matched));
    }

    #[test]
    fn test_reselecting_swept_pending_card_turns_it_up() {
        let mut b = board();
        let mut turn = TurnResolver::new();

        turn.select(&mut b, 1);
        b.reset_unmatched_to_hidden();

        let out = turn.select(&mut b, 1);
        assert_eq!(out, TurnOutcome::FirstRevealed(1));
        assert!(!out.completes_turn());
        assert_eq!(turn.state(), TurnState::Pending(1));
        assert_eq!(b.status(1), Some(CardStatus::Revealed));

        // The turn then completes normally.
        assert_eq!(
            turn.select(&mut b, 3),
            TurnOutcome::Matched { first: 1, second: 3 }
        );
    }

    #[test]
    fn test_reset_drops_pending() {
        let mut b = board();
        let mut turn = TurnResolver::new();
        turn.select(&mut b, 0);
        turn.reset();
        assert_eq!(turn.pending(), None);
    }

    mod props {
        use crate::board::Board;
        use crate::deck::{generate_deck, DeckRng};
        use crate::turn::{IgnoreReason, TurnOutcome, TurnResolver};
        use crate::types::{CardStatus, MAX_PICTURES};
        use proptest::prelude::*;

        /// Picks at or above this value sweep the board instead of selecting.
        const SWEEP: u8 = 20;

        proptest! {
            #[test]
            fn matched_cards_always_come_in_pairs(
                seed in any::<u64>(),
                picks in proptest::collection::vec(0u8..24, 0..200),
            ) {
                let deck = generate_deck(16, MAX_PICTURES, &mut DeckRng::new(seed)).unwrap();
                let mut b = Board::from_pairs(&deck);
                let mut turn = TurnResolver::new();

                for id in picks {
                    if id >= SWEEP {
                        b.reset_unmatched_to_hidden();
                        continue;
                    }

                    let out = turn.select(&mut b, id);

                    // A card on the board is never left face down by selecting it.
                    if let Some(status) = b.status(id) {
                        prop_assert_ne!(status, CardStatus::Hidden);
                    }
                    if out == TurnOutcome::Ignored(IgnoreReason::SameCard) {
                        prop_assert_eq!(b.status(id), Some(CardStatus::Revealed));
                    }
                    if let TurnOutcome::FirstRevealed(first) = out {
                        prop_assert_eq!(turn.pending(), Some(first));
                    }
                    for card in b.cards().iter().filter(|c| c.is_matched()) {
                        let partners = b
                            .cards()
                            .iter()
                            .filter(|o| o.pair == card.pair && o.is_matched())
                            .count();
                        prop_assert_eq!(partners, 2);
                    }
                }
            }
        }
    }
}
