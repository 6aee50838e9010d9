//! Money arithmetic helpers.
//!
//! Every reported amount is rounded to two fractional digits with
//! round-half-to-even; the commission itself is rounded the same way
//! before it is subtracted.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{AMOUNT_TOO_LARGE, MONEY_SCALE};
use crate::{Error, Result};

/// Round to the money scale using round-half-to-even.
///
/// Example: `2.345` -> `2.34`, `2.355` -> `2.36`
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    // Always carry two fractional digits so `100` prints as `100.00`.
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// `amount` minus `percent`% of it, the commission rounded to the money
/// scale before subtracting.
///
/// Fails with `InvalidArgument` when the amount is too large to carry the
/// commission arithmetic.
pub fn with_commission(amount: Decimal, percent: Decimal) -> Result<Decimal> {
    let commission = amount
        .checked_mul(percent)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| Error::invalid(AMOUNT_TOO_LARGE))?
        .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    amount
        .checked_sub(commission)
        .ok_or_else(|| Error::invalid(AMOUNT_TOO_LARGE))
}

/// Render an amount the way the terminal reports money, e.g. `95.00$`.
pub fn format_money(value: Decimal) -> String {
    format!("{}$", round_money(value))
}
