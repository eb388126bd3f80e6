//! Runner configuration from environment variables.

use crate::types::{DEFAULT_ASSET_ROOT, DEFAULT_CATEGORY, DEFAULT_FRAME_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Deck RNG seed.
    pub seed: u64,
    /// Categories offered on the category screen, in menu order.
    pub categories: Vec<String>,
    pub asset_root: String,
    /// JSONL event log destination; `None` disables logging.
    pub event_log_path: Option<String>,
    /// Fixed timestep of the host loop.
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            categories: vec![DEFAULT_CATEGORY.to_string()],
            asset_root: DEFAULT_ASSET_ROOT.to_string(),
            event_log_path: None,
            tick_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `MEMORY_SEED`: deck seed (random when unset or invalid)
    /// - `MEMORY_CATEGORIES`: comma-separated category list
    /// - `MEMORY_ASSET_ROOT`: image root directory
    /// - `MEMORY_EVENT_LOG`: JSONL event log path
    /// - `MEMORY_TICK_MS`: host loop timestep
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup("MEMORY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u64>);

        let categories: Vec<String> = lookup("MEMORY_CATEGORIES")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let categories = if categories.is_empty() {
            defaults.categories
        } else {
            categories
        };

        let asset_root = lookup("MEMORY_ASSET_ROOT")
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.asset_root);

        let event_log_path = lookup("MEMORY_EVENT_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let tick_ms = lookup("MEMORY_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            seed,
            categories,
            asset_root,
            event_log_path,
            tick_ms,
        }
    }
}
