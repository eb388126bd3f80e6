//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The view maps a
//! [`core::GameSnapshot`] into a framebuffer of styled characters, and the
//! renderer flushes framebuffers to the terminal, redrawing only changed runs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (no I/O) so layouts can be unit-tested
//! - Skip frames nobody would notice (see [`RenderThrottle`])

pub mod board_view;
pub mod fb;
pub mod render_throttle;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use board_view::{BoardView, ViewState, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
