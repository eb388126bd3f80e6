//! Memory Match (workspace facade crate).
//!
//! Re-exports the member crates as `memory_match::{core,input,term,types}` and
//! hosts the runner's configuration and event log.

pub mod config;
pub mod event_log;

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;

pub use config::AppConfig;
pub use event_log::EventLog;
