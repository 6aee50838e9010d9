//! Simulated processing delay.
//!
//! The terminal pauses for a random moment before reporting the result of
//! an operation. Tests use [`ProcessingDelay::none`] so sessions run
//! instantly.

use std::time::Duration;

use rand::Rng;

use crate::constants::{DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Uniformly random pause in `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingDelay {
    min_ms: u64,
    max_ms: u64,
}

impl ProcessingDelay {
    /// `min_ms` inclusive, `max_ms` exclusive. Bounds are swapped if given
    /// in the wrong order.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn is_none(&self) -> bool {
        self.max_ms == 0
    }

    /// Pick the duration of the next pause.
    pub fn sample(&self) -> Duration {
        if self.min_ms >= self.max_ms {
            return ms(self.min_ms);
        }
        ms(rand::thread_rng().gen_range(self.min_ms..self.max_ms))
    }

    /// Block the current thread for a sampled duration.
    pub fn pause(&self) {
        let d = self.sample();
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}

impl Default for ProcessingDelay {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MIN_MS, DEFAULT_DELAY_MAX_MS)
    }
}
