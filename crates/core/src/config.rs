//! Session configuration.

use std::time::{SystemTime, UNIX_EPOCH};

/// How a new session is seeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// RNG seed for piece kinds.
    pub seed: u32,
    /// Start with a full stack of reserved pieces.
    pub preseed_stack: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            preseed_stack: true,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `PIECE_RESERVE_SEED`: RNG seed (default: derived from the clock)
    /// - `PIECE_RESERVE_PRESEED_STACK`: `0`/`false` starts with an empty stack
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("PIECE_RESERVE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let preseed_stack = env::var("PIECE_RESERVE_PRESEED_STACK")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            seed,
            preseed_stack,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
