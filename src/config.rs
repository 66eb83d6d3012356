//! System configuration parameters
//!
//! All tunable parameters for the BotolBox deposit point.  The struct is
//! built once in `main()` and handed to the application service — no
//! globals, so tests can construct arbitrary variants.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Gate motor ---
    /// How long a forward/reverse pulse is held before the automatic stop
    /// (milliseconds).  Sized so the gate swings roughly 60 degrees.
    pub pulse_duration_ms: u32,

    // --- Scoring ---
    /// Points awarded per active-detector count, indexed 0..=4.
    /// Counts of 0 and 1 score zero by policy: a single interrupted beam
    /// is not treated as a valid bottle.
    pub score_table: [u16; 5],

    // --- Timing ---
    /// Idle delay between serial polls (milliseconds).
    pub poll_interval_ms: u32,
}

impl SystemConfig {
    /// Points for a given number of active detectors.  Counts above the
    /// table range clamp to the top entry (cannot occur with 4 detectors,
    /// but the lookup stays total).
    pub fn score_for_count(&self, count: usize) -> u16 {
        self.score_table[count.min(self.score_table.len() - 1)]
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            pulse_duration_ms: 1_000,
            score_table: [0, 0, 5, 10, 15],
            poll_interval_ms: 10,
        }
    }
}
