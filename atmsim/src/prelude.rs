// atmsim/src/prelude.rs

pub use crate::atm::{Atm, AtmConfig, MenuOption, SessionOutcome};
pub use crate::card::{Card, CardBuilder, CardInfo, CardOptions};
pub use crate::console::Console;
pub use crate::input::{InputSource, LineInput, ScriptedInput};
pub use crate::{
    CardIssuer, CardName, CardNetwork, CardNumber, CardholderName, Error, Pin, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{format_money, ms, round_money, with_commission, ProcessingDelay};
