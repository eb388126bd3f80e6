//! Session module - owns one game from menu to finish
//!
//! This module ties together the deck, board, turn resolver, scoring and
//! clock. It handles the pre-board menus, card selection side effects, the
//! delayed mismatch flip-back, finish detection and reset.
//!
//! Every state change is also queued as a [`GameEvent`]; hosts drain them with
//! [`Session::take_events`] after each action or tick.

use crate::board::Board;
use crate::clock::Clock;
use crate::deck::{generate_deck, DeckRng};
use crate::scoring::{stars_for, MoveCounter};
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::turn::{IgnoreReason, TurnOutcome, TurnResolver, TurnState};
use crate::types::*;

/// Identifies the session a deferred flip-back belongs to.
///
/// Tokens from an earlier board or session are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResetToken {
    generation: u32,
}

impl ResetToken {
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// A flip-back waiting for its delay to run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReset {
    pub token: ResetToken,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    rng: DeckRng,
    /// Bumped on every reset and every new board.
    generation: u32,
    stage: Stage,
    difficulty: Option<Difficulty>,
    category: Option<String>,
    board: Board,
    turn: TurnResolver,
    moves: MoveCounter,
    stars: u8,
    clock: Clock,
    /// Cards matched so far (always even).
    matched: usize,
    finished: bool,
    pending_resets: Vec<PendingReset>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a new session with the given deck seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeckRng::new(seed),
            generation: 0,
            stage: Stage::ChoosingDifficulty,
            difficulty: None,
            category: None,
            board: Board::new(),
            turn: TurnResolver::new(),
            moves: MoveCounter::new(),
            stars: MAX_STARS,
            clock: Clock::new(),
            matched: 0,
            finished: false,
            pending_resets: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn.state()
    }

    pub fn moves(&self) -> u32 {
        self.moves.moves()
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn matched_cards(&self) -> usize {
        self.matched
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn pending_resets(&self) -> &[PendingReset] {
        &self.pending_resets
    }

    /// Token for deferred work tied to the current board.
    pub fn reset_token(&self) -> ResetToken {
        ResetToken {
            generation: self.generation,
        }
    }

    /// Take all queued events in emission order.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Return to the difficulty menu with a clean slate.
    ///
    /// Moves, stars, clock, board and any in-flight flip-backs are discarded.
    pub fn start_session(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.stage = Stage::ChoosingDifficulty;
        self.difficulty = None;
        self.category = None;
        self.clear_board_state();
        self.events.push(GameEvent::SessionReset);
    }

    /// Abandon the current game. Safe to call at any time.
    ///
    /// Returns false when there was nothing to reset.
    pub fn reset(&mut self) -> bool {
        let pristine = self.stage == Stage::ChoosingDifficulty
            && self.difficulty.is_none()
            && self.category.is_none()
            && self.board.is_empty();
        if pristine {
            return false;
        }
        self.start_session();
        true
    }

    /// Record the board size; deals as soon as a category is also chosen.
    ///
    /// Ignored once a board is on the table.
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if !self.stage.is_pre_board() {
            return Ok(());
        }
        self.difficulty = Some(difficulty);
        self.advance_menu()
    }

    /// Record the picture category; deals as soon as a difficulty is also chosen.
    pub fn choose_category(&mut self, category: &str) -> Result<(), GameError> {
        if !self.stage.is_pre_board() {
            return Ok(());
        }
        self.category = Some(category.to_string());
        self.advance_menu()
    }

    fn advance_menu(&mut self) -> Result<(), GameError> {
        match (self.difficulty, self.category.is_some()) {
            (Some(_), true) => self.begin_board(),
            (Some(_), false) => {
                self.stage = Stage::ChoosingCategory;
                Ok(())
            }
            (None, _) => {
                self.stage = Stage::ChoosingDifficulty;
                Ok(())
            }
        }
    }

    /// Deal a fresh board for the chosen difficulty and category and start the clock.
    pub fn begin_board(&mut self) -> Result<(), GameError> {
        let difficulty = self
            .difficulty
            .ok_or(GameError::ConfigurationMissing("difficulty"))?;
        let category = self
            .category
            .clone()
            .ok_or(GameError::ConfigurationMissing("category"))?;

        let pairs = generate_deck(difficulty.total_cards(), MAX_PICTURES, &mut self.rng)?;

        self.generation = self.generation.wrapping_add(1);
        self.clear_board_state();
        self.board = Board::from_pairs(&pairs);
        self.clock.start();
        self.stage = Stage::Playing;

        self.events.push(GameEvent::BoardReady {
            difficulty,
            category,
            pairs,
        });
        Ok(())
    }

    fn clear_board_state(&mut self) {
        self.board.clear();
        self.turn.reset();
        self.moves.reset();
        self.stars = MAX_STARS;
        self.clock.reset();
        self.matched = 0;
        self.finished = false;
        self.pending_resets.clear();
    }

    /// Turn over a card and apply the turn's side effects.
    pub fn select_card(&mut self, id: CardId) -> TurnOutcome {
        if self.stage != Stage::Playing {
            return TurnOutcome::Ignored(IgnoreReason::NotPlaying);
        }

        let outcome = self.turn.select(&mut self.board, id);
        match outcome {
            TurnOutcome::Ignored(_) => {}
            TurnOutcome::FirstRevealed(card) => {
                self.events.push(GameEvent::CardRevealed { card });
            }
            TurnOutcome::Matched { first, second } => {
                self.events.push(GameEvent::CardRevealed { card: second });
                self.record_move();
                self.events.push(GameEvent::CardMatched { card: first });
                self.events.push(GameEvent::CardMatched { card: second });
                self.on_matched();
            }
            TurnOutcome::Mismatch { first, second } => {
                self.events.push(GameEvent::CardRevealed { card: second });
                self.record_move();
                self.events.push(GameEvent::Mismatch { first, second });
                self.pending_resets.push(PendingReset {
                    token: self.reset_token(),
                    remaining_ms: MISMATCH_RESET_MS,
                });
            }
        }
        outcome
    }

    fn record_move(&mut self) {
        let moves = self.moves.record_move();
        self.events.push(GameEvent::MoveCountChanged { moves });
    }

    /// Rating only moves on a match; mismatches just add to the move count.
    fn on_matched(&mut self) {
        self.matched += 2;

        if let Some(difficulty) = self.difficulty {
            let stars = stars_for(self.moves.moves(), difficulty);
            if stars != self.stars {
                self.stars = stars;
                self.events.push(GameEvent::StarsChanged { stars });
            }
        }

        let total = self.difficulty.map(|d| d.total_cards()).unwrap_or(0);
        if self.finished || self.matched != total {
            return;
        }

        self.finished = true;
        self.stage = Stage::Finished;
        if self.clock.stop() {
            self.events.push(GameEvent::Finished {
                moves: self.moves.moves(),
                stars: self.stars,
                elapsed_secs: self.clock.elapsed_secs(),
            });
        }
    }

    /// Run a deferred flip-back.
    ///
    /// Every revealed, unmatched card on the board is turned face down, not
    /// only the last two. A token from an earlier session or board does
    /// nothing. Returns true if any card flipped.
    pub fn fire_mismatch_reset(&mut self, token: ResetToken) -> bool {
        if token.generation != self.generation {
            return false;
        }
        if let Some(pos) = self.pending_resets.iter().position(|r| r.token == token) {
            self.pending_resets.remove(pos);
        }
        self.sweep_revealed()
    }

    fn sweep_revealed(&mut self) -> bool {
        let flipped = self.board.reset_unmatched_to_hidden();
        if flipped.is_empty() {
            return false;
        }
        // A first pick turned face down no longer opens a turn.
        if let Some(pending) = self.turn.pending() {
            if flipped.contains(&pending) {
                self.turn.reset();
            }
        }
        self.events.push(GameEvent::CardsReset {
            cards: flipped.to_vec(),
        });
        true
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Drives the clock and the mismatch flip-back countdowns. Returns true
    /// if anything visible changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        if let Some(time) = self.clock.tick(elapsed_ms) {
            self.events.push(GameEvent::TimeChanged { time });
            changed = true;
        }

        if self.pending_resets.is_empty() {
            return changed;
        }
        for reset in self.pending_resets.iter_mut() {
            reset.remaining_ms = reset.remaining_ms.saturating_sub(elapsed_ms);
        }
        let due = self
            .pending_resets
            .iter()
            .take_while(|r| r.remaining_ms == 0)
            .count();
        if due > 0 {
            self.pending_resets.drain(..due);
            changed |= self.sweep_revealed();
        }

        changed
    }

    /// Apply a frontend action
    pub fn apply_action(&mut self, action: GameAction) -> Result<bool, GameError> {
        match action {
            GameAction::SelectCard(id) => Ok(!matches!(
                self.select_card(id),
                TurnOutcome::Ignored(_)
            )),
            GameAction::ChooseDifficulty(difficulty) => {
                self.choose_difficulty(difficulty)?;
                Ok(true)
            }
            GameAction::ChooseCategory(category) => {
                self.choose_category(&category)?;
                Ok(true)
            }
            GameAction::Reset => Ok(self.reset()),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.board.cards().iter().map(|c| CardSnapshot {
            pair: c.pair,
            status: c.status,
        }));
        out.columns = self.difficulty.map(|d| d.columns() as u8).unwrap_or(0);
        out.stage = self.stage;
        out.difficulty = self.difficulty;
        out.category.clear();
        if let Some(category) = &self.category {
            out.category.push_str(category);
        }
        out.pending = self.turn.pending();
        out.moves = self.moves.moves();
        out.stars = self.stars;
        out.time = self.clock.display();
        out.finished = self.finished;
        out.generation = self.generation;
        out.seed = self.rng.seed();
        out.resets_in_flight = self.pending_resets.len().min(u8::MAX as usize) as u8;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
