use std::fmt;

use crate::types::{CardIssuer, CardNetwork};

/// Printable description of a card: labels, masked number and names.
///
/// Holds neither the PIN nor the full card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    pub issuer: CardIssuer,
    pub network: CardNetwork,
    pub masked_number: String,
    pub name: String,
    pub cardholder_name: String,
}

impl From<&crate::card::Card> for CardInfo {
    fn from(card: &crate::card::Card) -> Self {
        CardInfo {
            issuer: card.issuer(),
            network: card.network(),
            masked_number: card.number().masked(),
            name: card.name().to_string(),
            cardholder_name: card.cardholder_name().to_string(),
        }
    }
}

impl fmt::Display for CardInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Card issuer: {}", self.issuer)?;
        writeln!(f, "Card network: {}", self.network)?;
        writeln!(f, "Card number: {}", self.masked_number)?;
        writeln!(f, "Card name: {}", self.name)?;
        write!(f, "Cardholder name: {}", self.cardholder_name)
    }
}
