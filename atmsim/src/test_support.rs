// atmsim/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common ScriptedInput/Console setup so tests
//! across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use rust_decimal::Decimal;

use crate::atm::{Atm, AtmConfig};
use crate::card::{Card, CardBuilder};
use crate::console::Console;
use crate::input::ScriptedInput;
use crate::types::{CardIssuer, CardNetwork};
use crate::utils::ProcessingDelay;
use crate::Result;

/// Console fed by the given lines, writing into an in-memory buffer.
#[doc(hidden)]
pub fn scripted_console<I, S>(lines: I) -> Console<ScriptedInput, Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Console::new(ScriptedInput::new(lines), Vec::new())
}

/// Everything written to a scripted console so far.
#[doc(hidden)]
pub fn transcript(console: &Console<ScriptedInput, Vec<u8>>) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// ATM with default settings but no processing delay.
#[doc(hidden)]
pub fn instant_atm(bank: CardIssuer) -> Atm {
    Atm::with_config(bank, AtmConfig::default().delay(ProcessingDelay::none()))
        .expect("default config is valid")
}

/// Visa card "4375 6759 2480 6971" with PIN "7594".
#[doc(hidden)]
pub fn visa_card(issuer: CardIssuer, balance: Decimal) -> Result<Card> {
    CardBuilder::new(issuer, CardNetwork::Visa, "4375 6759 2480 6971", "7594")
        .name("Ultimate")
        .cardholder_name("John Williams")
        .initial_balance(balance)
        .build()
}
