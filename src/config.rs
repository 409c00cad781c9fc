//! Runtime configuration read from the environment.

use std::env;

use crate::types::TICK_MS;

/// Binary settings. Unset, blank or unparsable variables fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Piece RNG seed (`BLOCKFALL_SEED`, random when unset).
    pub seed: u64,
    /// Frame interval in milliseconds (`BLOCKFALL_TICK_MS`).
    pub tick_ms: u32,
    /// JSON-lines event log destination (`BLOCKFALL_LOG_PATH`).
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);

        let tick_ms = var("BLOCKFALL_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = var("BLOCKFALL_LOG_PATH");

        Self {
            seed,
            tick_ms,
            log_path,
        }
    }
}
