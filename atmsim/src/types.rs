// atmsim/src/types.rs

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

use crate::constants::*;
use crate::{Error, Result};

/// Bank that issued a card (or operates an ATM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CardIssuer {
    AmericanExpress,
    Chase,
    Citi,
    CapitalOne,
    BankOfAmerica,
    Discover,
    WellsFargo,
}

impl CardIssuer {
    /// Every issuer, in menu order.
    pub const ALL: [CardIssuer; 7] = [
        CardIssuer::AmericanExpress,
        CardIssuer::Chase,
        CardIssuer::Citi,
        CardIssuer::CapitalOne,
        CardIssuer::BankOfAmerica,
        CardIssuer::Discover,
        CardIssuer::WellsFargo,
    ];

    /// Human-readable bank name.
    pub fn label(&self) -> &'static str {
        match self {
            CardIssuer::AmericanExpress => "American Express",
            CardIssuer::Chase => "Chase",
            CardIssuer::Citi => "Citi",
            CardIssuer::CapitalOne => "Capital One",
            CardIssuer::BankOfAmerica => "Bank of America",
            CardIssuer::Discover => "Discover",
            CardIssuer::WellsFargo => "Wells Fargo",
        }
    }
}

impl fmt::Display for CardIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardIssuer {
    type Err = Error;

    /// Accepts the label ("Bank of America") or its kebab-case form
    /// ("bank-of-america"), ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::label).ok_or_else(|| Error::UnknownVariant {
            kind: "card issuer",
            value: s.to_string(),
        })
    }
}

/// Payment network; selects the card number format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Discover,
}

impl CardNetwork {
    pub const ALL: [CardNetwork; 5] = [
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::AmericanExpress,
        CardNetwork::DinersClub,
        CardNetwork::Discover,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "MasterCard",
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Discover => "Discover",
        }
    }

    /// Number format enforced for cards on this network.
    fn number_pattern(&self) -> &'static Regex {
        match self {
            CardNetwork::Visa => &*VISA_RE,
            CardNetwork::Mastercard => &*MASTERCARD_RE,
            CardNetwork::AmericanExpress => &*AMERICAN_EXPRESS_RE,
            CardNetwork::DinersClub => &*DINERS_CLUB_RE,
            CardNetwork::Discover => &*DISCOVER_RE,
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardNetwork {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::label).ok_or_else(|| Error::UnknownVariant {
            kind: "card network",
            value: s.to_string(),
        })
    }
}

fn lookup<T: Copy>(all: &[T], s: &str, label: fn(&T) -> &'static str) -> Option<T> {
    let wanted = s.trim();
    all.iter().copied().find(|v| {
        let l = label(v);
        l.eq_ignore_ascii_case(wanted) || l.replace(' ', "-").eq_ignore_ascii_case(wanted)
    })
}

static VISA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VISA_PATTERN).expect("Invalid Visa regex pattern"));
static MASTERCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MASTERCARD_PATTERN).expect("Invalid MasterCard regex pattern"));
static AMERICAN_EXPRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AMERICAN_EXPRESS_PATTERN).expect("Invalid American Express regex pattern")
});
static DINERS_CLUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DINERS_CLUB_PATTERN).expect("Invalid Diners Club regex pattern"));
static DISCOVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DISCOVER_PATTERN).expect("Invalid Discover regex pattern"));
static PIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PIN_PATTERN).expect("Invalid PIN regex pattern"));
static CARD_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CARD_NAME_PATTERN).expect("Invalid card name regex pattern"));
static CARDHOLDER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CARDHOLDER_NAME_PATTERN).expect("Invalid cardholder name regex pattern")
});

/// Card number - Newtype Pattern (digits only, network-validated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Strip separators from `raw` and validate the result against the
    /// network's number format.
    pub fn parse(network: CardNetwork, raw: &str) -> Result<Self> {
        let digits: String = raw
            .chars()
            .filter(|c| !NUMBER_SEPARATORS.contains(c))
            .collect();
        if !network.number_pattern().is_match(&digits) {
            return Err(Error::invalid("Invalid card number"));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All digits but the last four replaced by the mask character.
    pub fn masked(&self) -> String {
        let hidden = self.0.len().saturating_sub(VISIBLE_DIGITS);
        let mut s = String::with_capacity(self.0.len());
        s.extend(std::iter::repeat_n(MASK_CHAR, hidden));
        s.push_str(&self.0[hidden..]);
        s
    }
}

/// Four-digit PIN. `Debug` never prints the digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    /// Exact comparison against a candidate entered at the terminal.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl TryFrom<&str> for Pin {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        if !PIN_RE.is_match(s) {
            return Err(Error::invalid("Invalid card PIN"));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// Card product name, e.g. "Ultimate".
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct CardName(String);

impl CardName {
    pub fn undefined() -> Self {
        Self(UNDEFINED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CardName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        if !CARD_NAME_RE.is_match(s) {
            return Err(Error::invalid("Invalid card name"));
        }
        Ok(Self(s.to_string()))
    }
}

/// Cardholder's first and last name, e.g. "John Williams".
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct CardholderName(String);

impl CardholderName {
    pub fn undefined() -> Self {
        Self(UNDEFINED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CardholderName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        if !CARDHOLDER_NAME_RE.is_match(s) {
            return Err(Error::invalid("Invalid cardholder's name"));
        }
        Ok(Self(s.to_string()))
    }
}
