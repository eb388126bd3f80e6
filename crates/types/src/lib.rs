//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data, usable from the core state machine, the
//! terminal view, and the event log alike.
//!
//! # Board Sizes
//!
//! | Difficulty | Cards | Columns | 3-star threshold |
//! |------------|-------|---------|------------------|
//! | Easy       | 16    | 4       | 15 moves         |
//! | Hard       | 36    | 6       | 25 moves         |
//!
//! Pair identifiers are drawn from `1..=MAX_PICTURES` (18 pictures per category).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TIMER_TICK_MS` | 1000 | Resolution of the displayed clock |
//! | `MISMATCH_RESET_MS` | 500 | Delay before mismatched cards flip back |
//! | `DEFAULT_FRAME_MS` | 50 | Host loop fixed timestep |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Difficulty, ClockDisplay, card_asset_path};
//!
//! let level: Difficulty = "HARD".parse().unwrap();
//! assert_eq!(level.total_cards(), 36);
//! assert_eq!(level.columns(), 6);
//!
//! assert_eq!(ClockDisplay::from_secs(75).to_string(), "01:15");
//! assert_eq!(card_asset_path("img", "sweets", 7), "img/sweets/7.jpg");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of distinct pictures available per category.
pub const MAX_PICTURES: u8 = 18;

/// Total cards on an easy board (4x4).
pub const EASY_CARDS: usize = 16;

/// Total cards on a hard board (6x6).
pub const HARD_CARDS: usize = 36;

/// Largest board of any difficulty; sizes allocation-free card storage.
pub const MAX_CARDS: usize = HARD_CARDS;

/// Move threshold for three stars on easy.
pub const EASY_STAR_THRESHOLD: u32 = 15;

/// Move threshold for three stars on hard.
pub const HARD_STAR_THRESHOLD: u32 = 25;

/// Best possible rating; every session starts here.
pub const MAX_STARS: u8 = 3;

/// Displayed clock resolution (1 second).
pub const TIMER_TICK_MS: u32 = 1000;

/// Delay before a mismatched pair is flipped face down again.
pub const MISMATCH_RESET_MS: u32 = 500;

/// Default fixed timestep for the host loop.
pub const DEFAULT_FRAME_MS: u32 = 50;

/// Category used when none is configured.
pub const DEFAULT_CATEGORY: &str = "sweets";

/// Default root directory for card images.
pub const DEFAULT_ASSET_ROOT: &str = "img";

/// Position of a card on the board (unique per board).
pub type CardId = u8;

/// Picture shared by exactly two cards (`1..=MAX_PICTURES`).
pub type PairId = u8;

/// Board size and rating thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Total number of cards dealt for this difficulty (always even).
    pub fn total_cards(&self) -> usize {
        match self {
            Difficulty::Easy => EASY_CARDS,
            Difficulty::Hard => HARD_CARDS,
        }
    }

    /// Number of distinct pairs on the board.
    pub fn pair_count(&self) -> usize {
        self.total_cards() / 2
    }

    /// Moves allowed while keeping three stars.
    pub fn star_threshold(&self) -> u32 {
        match self {
            Difficulty::Easy => EASY_STAR_THRESHOLD,
            Difficulty::Hard => HARD_STAR_THRESHOLD,
        }
    }

    /// Grid width used by square layouts.
    pub fn columns(&self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Hard => 6,
        }
    }
}

/// Parse difficulty from string (case-insensitive)
///
/// # Examples
///
/// ```
/// use memory_match_types::{Difficulty, GameError};
///
/// assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
/// assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
/// assert_eq!(
///     "medium".parse::<Difficulty>(),
///     Err(GameError::UnknownDifficulty("medium".to_string()))
/// );
/// ```
impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-card status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

/// Lifecycle stage of a session.
///
/// The two pre-board stages mirror the difficulty and category screens shown
/// before a board is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    ChoosingDifficulty,
    ChoosingCategory,
    Playing,
    Finished,
}

impl Stage {
    pub fn is_pre_board(&self) -> bool {
        matches!(self, Stage::ChoosingDifficulty | Stage::ChoosingCategory)
    }
}

/// Elapsed time formatted as `mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClockDisplay {
    pub minutes: u32,
    pub seconds: u8,
}

impl ClockDisplay {
    /// Split whole seconds into minutes (floored) and the remaining seconds.
    pub fn from_secs(total_secs: u64) -> Self {
        Self {
            minutes: (total_secs / 60) as u32,
            seconds: (total_secs % 60) as u8,
        }
    }
}

impl fmt::Display for ClockDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Input actions accepted by a session.
///
/// These are produced by the terminal input layer (or any other frontend)
/// and applied with `Session::apply_action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GameAction {
    /// Turn over the card at the given position
    SelectCard(CardId),
    /// Pick the board size
    ChooseDifficulty(Difficulty),
    /// Pick the picture category
    ChooseCategory(String),
    /// Abandon the current session and go back to the difficulty screen
    Reset,
}

/// Notifications emitted by a session, in the order they happened.
///
/// Renderers and the event log consume these; the core never draws anything
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    BoardReady {
        difficulty: Difficulty,
        category: String,
        pairs: Vec<PairId>,
    },
    CardRevealed {
        card: CardId,
    },
    CardMatched {
        card: CardId,
    },
    Mismatch {
        first: CardId,
        second: CardId,
    },
    CardsReset {
        cards: Vec<CardId>,
    },
    MoveCountChanged {
        moves: u32,
    },
    StarsChanged {
        stars: u8,
    },
    TimeChanged {
        time: ClockDisplay,
    },
    Finished {
        moves: u32,
        stars: u8,
        elapsed_secs: u64,
    },
    SessionReset,
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot deal {total_cards} cards from {max_pictures} pictures")]
    InvalidDifficultyConfig { total_cards: usize, max_pictures: u8 },

    #[error("cannot build a board before the {0} is chosen")]
    ConfigurationMissing(&'static str),

    #[error("card {0} is already matched")]
    AlreadyResolved(CardId),

    #[error("no card at position {0}")]
    UnknownCard(CardId),

    #[error("cards {first} and {second} show different pictures")]
    PairMismatch { first: CardId, second: CardId },

    #[error("card {0} cannot be paired with itself")]
    SameCard(CardId),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Image path for a card: `{root}/{category}/{pair}.jpg`.
pub fn card_asset_path(root: &str, category: &str, pair: PairId) -> String {
    if root.is_empty() {
        format!("{category}/{pair}.jpg")
    } else {
        format!("{}/{category}/{pair}.jpg", root.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_defaults() {
        assert_eq!(Difficulty::Easy.total_cards(), 16);
        assert_eq!(Difficulty::Hard.total_cards(), 36);
        assert_eq!(Difficulty::Easy.star_threshold(), 15);
        assert_eq!(Difficulty::Hard.star_threshold(), 25);
        assert_eq!(MISMATCH_RESET_MS, 500);
        assert_eq!(TIMER_TICK_MS, 1000);

        for level in Difficulty::ALL {
            assert_eq!(level.total_cards() % 2, 0);
            assert!(level.pair_count() <= MAX_PICTURES as usize);
            assert_eq!(level.columns() * level.columns(), level.total_cards());
        }
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        for level in Difficulty::ALL {
            assert_eq!(level.as_str().parse::<Difficulty>(), Ok(level));
        }

        let err = "  medium ".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, GameError::UnknownDifficulty("medium".to_string()));
        assert_eq!(err.to_string(), "unknown difficulty: medium");
    }

    #[test]
    fn clock_display_zero_pads() {
        assert_eq!(ClockDisplay::from_secs(0).to_string(), "00:00");
        assert_eq!(ClockDisplay::from_secs(9).to_string(), "00:09");
        assert_eq!(ClockDisplay::from_secs(600).to_string(), "10:00");
        assert_eq!(ClockDisplay::from_secs(3599).to_string(), "59:59");
    }

    #[test]
    fn asset_path_trims_trailing_slash() {
        assert_eq!(card_asset_path("img/", "sweets", 1), "img/sweets/1.jpg");
        assert_eq!(card_asset_path("", "sweets", 18), "sweets/18.jpg");
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&GameEvent::StarsChanged { stars: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"stars_changed","stars":2}"#);

        let json = serde_json::to_string(&GameEvent::SessionReset).unwrap();
        assert_eq!(json, r#"{"type":"session_reset"}"#);
    }

    #[test]
    fn actions_round_trip_through_json() {
        let action = GameAction::ChooseCategory("animals".to_string());
        let json = serde_json::to_string(&action).unwrap();
        let back: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
