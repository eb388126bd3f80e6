//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: dealing, turning cards,
//! pairing, scoring, the clock and the session lifecycle. It has **no
//! dependencies** on terminals, files or the network, which keeps it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Any frontend can drive it through actions, ticks and snapshots
//!
//! # Module Structure
//!
//! - [`deck`]: Seeded picture draw and Fisher-Yates shuffle
//! - [`board`]: Dealt cards and their Hidden / Revealed / Matched status
//! - [`turn`]: Idle / Pending selection state machine
//! - [`scoring`]: Move counter and star rating
//! - [`clock`]: Elapsed-time clock driven by ticks
//! - [`session`]: Menus, side effects, mismatch flip-back, finish and reset
//! - [`snapshot`]: Allocation-free view for renderers
//!
//! # Game Rules
//!
//! - Cards are turned two at a time; a turn is one move
//! - Matching cards stay face up for the rest of the game
//! - Mismatched cards flip back after 500ms; input is not blocked meanwhile
//! - Three stars up to the difficulty threshold, two up to 1.5x, then one
//! - The clock starts when the board is dealt and stops on the last match
//!
//! # Example
//!
//! ```
//! use memory_match_core::Session;
//! use memory_match_types::{Difficulty, GameAction, Stage};
//!
//! let mut session = Session::new(12345);
//! session.apply_action(GameAction::ChooseDifficulty(Difficulty::Easy)).unwrap();
//! session.apply_action(GameAction::ChooseCategory("sweets".into())).unwrap();
//! assert_eq!(session.stage(), Stage::Playing);
//!
//! session.apply_action(GameAction::SelectCard(0)).unwrap();
//! session.tick(1000);
//! assert_eq!(session.snapshot().time.to_string(), "00:01");
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) from the host loop with the
//! elapsed milliseconds. Both the clock and pending flip-backs advance only
//! through ticks.

pub mod board;
pub mod clock;
pub mod deck;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod turn;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Card};
pub use clock::Clock;
pub use deck::{generate_deck, DeckRng};
pub use scoring::{stars_for, MoveCounter};
pub use session::{PendingReset, ResetToken, Session};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use turn::{IgnoreReason, TurnOutcome, TurnResolver, TurnState};
