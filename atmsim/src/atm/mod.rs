// atmsim/src/atm/mod.rs

use std::io::Write;

use log::info;
use rust_decimal::Decimal;

use crate::card::Card;
use crate::console::Console;
use crate::input::InputSource;
use crate::types::CardIssuer;
use crate::Result;

mod config;
pub use config::AtmConfig;

pub mod menu;
pub mod session;

pub use menu::MenuOption;
pub use session::{Authenticating, Authentication, MenuLoop, Session};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user picked "Exit" from the menu.
    Exited,
    /// The PIN was entered wrongly too many times.
    LockedOut,
}

/// An ATM operated by one bank.
#[derive(Debug, Clone)]
pub struct Atm {
    bank: CardIssuer,
    config: AtmConfig,
}

impl Atm {
    pub fn new(bank: CardIssuer) -> Self {
        Self {
            bank,
            config: AtmConfig::default(),
        }
    }

    pub fn with_config(bank: CardIssuer, config: AtmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { bank, config })
    }

    pub fn bank(&self) -> CardIssuer {
        self.bank
    }

    pub fn config(&self) -> &AtmConfig {
        &self.config
    }

    /// Commission in percent for `card`: zero for our own cards.
    pub fn commission_for(&self, card: &Card) -> Decimal {
        if card.issuer() != self.bank {
            self.config.commission_percent
        } else {
            Decimal::ZERO
        }
    }

    /// Serve one card from PIN entry to exit or lockout.
    ///
    /// Rejected amounts are reported and asked again inside the session;
    /// only console failures (including running out of input) come back as
    /// errors.
    pub fn run<I: InputSource, W: Write>(
        &self,
        card: &mut Card,
        console: &mut Console<I, W>,
    ) -> Result<SessionOutcome> {
        info!("session started at {} ATM", self.bank);
        let outcome = match Session::new(self, card, console).authenticate()? {
            Authentication::Granted(session) => session.run_menu()?,
            Authentication::LockedOut => SessionOutcome::LockedOut,
        };
        info!("session finished: {:?}", outcome);
        Ok(outcome)
    }
}
