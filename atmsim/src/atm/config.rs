//! Configuration for the ATM session

use rust_decimal::Decimal;

use crate::constants::{DEFAULT_COMMISSION_PERCENT, DEFAULT_PIN_ATTEMPTS};
use crate::utils::ProcessingDelay;
use crate::{Error, Result};

/// ATM session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AtmConfig {
    /// PIN entries allowed before lockout (default: 3)
    pub max_pin_attempts: u32,

    /// Commission charged on cards from other banks, in percent (default: 5)
    pub commission_percent: Decimal,

    /// Pause before reporting an operation's result (default: 1-2 s)
    pub delay: ProcessingDelay,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            max_pin_attempts: DEFAULT_PIN_ATTEMPTS,
            commission_percent: Decimal::from(DEFAULT_COMMISSION_PERCENT),
            delay: ProcessingDelay::default(),
        }
    }
}

impl AtmConfig {
    /// Set the number of PIN entries allowed.
    pub fn max_pin_attempts(mut self, attempts: u32) -> Self {
        self.max_pin_attempts = attempts;
        self
    }

    /// Set the foreign-card commission, in percent.
    pub fn commission_percent(mut self, percent: Decimal) -> Self {
        self.commission_percent = percent;
        self
    }

    /// Set the processing pause; `ProcessingDelay::none()` disables it.
    pub fn delay(mut self, delay: ProcessingDelay) -> Self {
        self.delay = delay;
        self
    }

    /// Reject settings no session could run with.
    pub fn validate(&self) -> Result<()> {
        if self.max_pin_attempts == 0 {
            return Err(Error::invalid("PIN attempts must be at least 1"));
        }
        if self.commission_percent < Decimal::ZERO || self.commission_percent >= Decimal::ONE_HUNDRED {
            return Err(Error::invalid(
                "Commission percentage must be in the range [0, 100)",
            ));
        }
        Ok(())
    }
}
