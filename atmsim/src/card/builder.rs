use rust_decimal::Decimal;

use crate::card::Card;
use crate::types::{CardIssuer, CardNetwork};
use crate::Result;

/// Optional card fields. Anything left as `None` takes its default
/// ("Undefined" names, zero balance).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardOptions {
    pub name: Option<String>,
    pub cardholder_name: Option<String>,
    pub initial_balance: Option<Decimal>,
}

impl CardOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.cardholder_name = Some(name.into());
        self
    }

    pub fn initial_balance(mut self, balance: Decimal) -> Self {
        self.initial_balance = Some(balance);
        self
    }
}

/// Fluent construction of a [`Card`].
///
/// Setters only record values; every rule is checked in [`build`], which
/// either returns a fully valid card or an error.
///
/// [`build`]: CardBuilder::build
#[derive(Debug, Clone)]
pub struct CardBuilder {
    issuer: CardIssuer,
    network: CardNetwork,
    number: String,
    pin: String,
    options: CardOptions,
}

impl CardBuilder {
    pub fn new(
        issuer: CardIssuer,
        network: CardNetwork,
        number: impl Into<String>,
        pin: impl Into<String>,
    ) -> Self {
        Self {
            issuer,
            network,
            number: number.into(),
            pin: pin.into(),
            options: CardOptions::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.name(name);
        self
    }

    pub fn cardholder_name(mut self, name: impl Into<String>) -> Self {
        self.options = self.options.cardholder_name(name);
        self
    }

    pub fn initial_balance(mut self, balance: Decimal) -> Self {
        self.options = self.options.initial_balance(balance);
        self
    }

    pub fn build(self) -> Result<Card> {
        Card::new(
            self.issuer,
            self.network,
            &self.number,
            &self.pin,
            self.options,
        )
    }
}
