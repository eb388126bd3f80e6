//! Board module - the dealt cards and their per-card status
//!
//! Cards are stored in deal order; a card's position is its [`CardId`].
//! Storage is a fixed-capacity `ArrayVec` sized for the largest board, so the
//! board never allocates after it is dealt.

use arrayvec::ArrayVec;

use crate::types::{CardId, CardStatus, GameError, PairId, MAX_CARDS};

/// A single dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub pair: PairId,
    pub status: CardStatus,
}

impl Card {
    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }
}

/// The dealt cards of one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cards: ArrayVec<Card, MAX_CARDS>,
}

impl Board {
    /// Create an empty board (nothing dealt yet).
    pub fn new() -> Self {
        Self {
            cards: ArrayVec::new(),
        }
    }

    /// Deal a board from a pair id sequence, every card face down.
    ///
    /// Ids beyond `MAX_CARDS` are dropped.
    pub fn from_pairs(pairs: &[PairId]) -> Self {
        let cards = pairs
            .iter()
            .take(MAX_CARDS)
            .enumerate()
            .map(|(i, &pair)| Card {
                id: i as CardId,
                pair,
                status: CardStatus::Hidden,
            })
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    pub fn status(&self, id: CardId) -> Option<CardStatus> {
        self.get(id).map(|c| c.status)
    }

    fn card_mut(&mut self, id: CardId) -> Result<&mut Card, GameError> {
        self.cards
            .get_mut(id as usize)
            .ok_or(GameError::UnknownCard(id))
    }

    /// Turn a card face up.
    ///
    /// Revealing a card that is already face up is a no-op.
    pub fn reveal(&mut self, id: CardId) -> Result<(), GameError> {
        let card = self.card_mut(id)?;
        match card.status {
            CardStatus::Matched => Err(GameError::AlreadyResolved(id)),
            _ => {
                card.status = CardStatus::Revealed;
                Ok(())
            }
        }
    }

    /// Lock two cards showing the same picture as matched.
    ///
    /// Either card may already have been swept face down by a pending
    /// mismatch reset; only the pair ids have to agree.
    pub fn mark_matched(&mut self, a: CardId, b: CardId) -> Result<(), GameError> {
        if a == b {
            return Err(GameError::SameCard(a));
        }
        let first = *self.get(a).ok_or(GameError::UnknownCard(a))?;
        let second = *self.get(b).ok_or(GameError::UnknownCard(b))?;

        if first.is_matched() {
            return Err(GameError::AlreadyResolved(a));
        }
        if second.is_matched() {
            return Err(GameError::AlreadyResolved(b));
        }
        if first.pair != second.pair {
            return Err(GameError::PairMismatch {
                first: a,
                second: b,
            });
        }

        self.cards[a as usize].status = CardStatus::Matched;
        self.cards[b as usize].status = CardStatus::Matched;
        Ok(())
    }

    /// Flip every revealed (non-matched) card back face down.
    ///
    /// Returns the ids that changed, in board order.
    pub fn reset_unmatched_to_hidden(&mut self) -> ArrayVec<CardId, MAX_CARDS> {
        let mut flipped = ArrayVec::new();
        for card in self.cards.iter_mut() {
            if card.status == CardStatus::Revealed {
                card.status = CardStatus::Hidden;
                flipped.push(card.id);
            }
        }
        flipped
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// True once a dealt board has every card matched.
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }

    /// Remove all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
