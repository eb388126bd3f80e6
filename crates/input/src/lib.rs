//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps keys into [`InputCommand`]s and keeps a [`Cursor`] that
//! turns those commands into [`crate::types::GameAction`]s for the current
//! screen (menu entry or card on the grid).

pub mod cursor;
pub mod map;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit, InputCommand};
