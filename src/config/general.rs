//! The general configuration settings for typedeck.
//!
//! Defines the `[general]` table of typedeck.toml: where the storage card
//! lives on the host and the two timing knobs of the cycle loop.

use serde::Deserialize;
use std::time::Duration;

/// Upper bound on the main-loop tick interval.
pub const MAX_TICK_MS: u64 = 250;

/// Lower bound on the cursor blink interval.
pub const MIN_BLINK_MS: u64 = 100;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    root: String,
    tick_ms: u64,
    blink_ms: u64,
}

impl Default for General {
    fn default() -> Self {
        General {
            root: "./sdcard".to_string(),
            tick_ms: 16,
            blink_ms: 500,
        }
    }
}

impl General {
    #[inline]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Inter-cycle delay of the main loop.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.min(MAX_TICK_MS))
    }

    /// Cursor blink interval, clamped to [MIN_BLINK_MS].
    pub fn blink(&self) -> Duration {
        Duration::from_millis(self.blink_ms.max(MIN_BLINK_MS))
    }
}
