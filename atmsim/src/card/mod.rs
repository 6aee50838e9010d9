// atmsim/src/card/mod.rs

use std::fmt;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::AMOUNT_TOO_LARGE;
use crate::types::{CardIssuer, CardName, CardNetwork, CardNumber, CardholderName, Pin};
use crate::{Error, Result};

mod info;
pub use info::CardInfo;

pub mod builder;
pub use builder::{CardBuilder, CardOptions};

/// A bank card bound to a single account balance.
///
/// Identity fields are fixed at construction; only `deposit` and
/// `withdraw` change the card afterwards, and the balance never goes
/// below zero.
#[derive(Debug)]
pub struct Card {
    issuer: CardIssuer,
    network: CardNetwork,
    number: CardNumber,
    pin: Pin,
    name: CardName,
    cardholder_name: CardholderName,
    balance: Decimal,
}

impl Card {
    /// Validate every field and build a card. Nothing is constructed if
    /// any field is rejected.
    pub fn new(
        issuer: CardIssuer,
        network: CardNetwork,
        number: &str,
        pin: &str,
        options: CardOptions,
    ) -> Result<Self> {
        let number = CardNumber::parse(network, number)?;
        let pin = Pin::try_from(pin)?;
        let name = match options.name.as_deref() {
            Some(n) => CardName::try_from(n)?,
            None => CardName::undefined(),
        };
        let cardholder_name = match options.cardholder_name.as_deref() {
            Some(n) => CardholderName::try_from(n)?,
            None => CardholderName::undefined(),
        };
        let balance = options.initial_balance.unwrap_or(Decimal::ZERO);
        if balance < Decimal::ZERO {
            return Err(Error::invalid("Card balance cannot be less than 0"));
        }

        debug!(
            "card issued: issuer={} network={} number={}",
            issuer,
            network,
            number.masked()
        );

        Ok(Self {
            issuer,
            network,
            number,
            pin,
            name,
            cardholder_name,
            balance,
        })
    }

    pub fn issuer(&self) -> CardIssuer {
        self.issuer
    }
    pub fn network(&self) -> CardNetwork {
        self.network
    }
    pub fn number(&self) -> &CardNumber {
        &self.number
    }
    pub fn pin(&self) -> &Pin {
        &self.pin
    }
    pub fn name(&self) -> &CardName {
        &self.name
    }
    pub fn cardholder_name(&self) -> &CardholderName {
        &self.cardholder_name
    }
    /// Current balance, unrounded.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance. The amount must be positive and the
    /// resulting balance representable.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid(
                "The amount to top up must be greater than 0.",
            ));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| Error::invalid(AMOUNT_TOO_LARGE))?;
        debug!("deposit {} -> balance {}", amount, self.balance);
        Ok(())
    }

    /// Take `amount` off the balance. Fails without touching the balance
    /// when the amount is not positive or exceeds what is available.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::invalid(
                "The withdrawal amount must be greater than 0.",
            ));
        }
        if amount > self.balance {
            debug!(
                "withdrawal of {} refused, balance {}",
                amount, self.balance
            );
            return Err(Error::InsufficientFunds);
        }
        self.balance -= amount;
        debug!("withdraw {} -> balance {}", amount, self.balance);
        Ok(())
    }

    /// Snapshot of the displayable fields (masked number, no PIN).
    pub fn info(&self) -> CardInfo {
        CardInfo::from(self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.info(), f)
    }
}
