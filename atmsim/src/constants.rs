// atmsim/src/constants.rs
//! Common constants used across the crate

/// Number of PIN entries allowed before the session locks the card out
pub const DEFAULT_PIN_ATTEMPTS: u32 = 3;

/// Commission (in percent) charged when the card issuer is not the ATM's bank
pub const DEFAULT_COMMISSION_PERCENT: i64 = 5;

/// Lower bound (inclusive) of the simulated processing delay
pub const DEFAULT_DELAY_MIN_MS: u64 = 1000;

/// Upper bound (exclusive) of the simulated processing delay
pub const DEFAULT_DELAY_MAX_MS: u64 = 2000;

/// Fractional digits used for every reported money value
pub const MONEY_SCALE: u32 = 2;

/// Reported when an amount is too large for the balance arithmetic
pub const AMOUNT_TOO_LARGE: &str = "The amount is too large to process.";

/// Sentinel used for optional card names that were not supplied
pub const UNDEFINED: &str = "Undefined";

/// Filler used when masking card numbers
pub const MASK_CHAR: char = '*';

/// Number of trailing digits left visible in a masked card number
pub const VISIBLE_DIGITS: usize = 4;

/// Characters stripped from a raw card number before validation
pub const NUMBER_SEPARATORS: [char; 4] = ['_', ',', ' ', '-'];

pub const PIN_PATTERN: &str = r"^[0-9]{4}$";
pub const CARD_NAME_PATTERN: &str = r"^[A-Z][a-z]{2,16}$";
pub const CARDHOLDER_NAME_PATTERN: &str = r"^[A-Z][a-z]{2,18} [A-Z][a-z]{2,18}$";

pub const VISA_PATTERN: &str = r"^4[0-9]{12}(?:[0-9]{3})?$";
pub const MASTERCARD_PATTERN: &str = r"^(?:5[1-5][0-9]{14}|2(?:22[1-9][0-9]{12}|2[3-9][0-9]{13}|[3-6][0-9]{14}|7[0-1][0-9]{13}|720[0-9]{12}))$";
pub const AMERICAN_EXPRESS_PATTERN: &str = r"^3[47][0-9]{13}$";
pub const DINERS_CLUB_PATTERN: &str = r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$";
pub const DISCOVER_PATTERN: &str = r"^(?:6011[0-9]{12}|64[4-9][0-9]{13}|65[0-9]{14}|622(?:12[6-9]|1[3-9][0-9]|[2-8][0-9]{2}|9[01][0-9]|92[0-5])[0-9]{10})$";
