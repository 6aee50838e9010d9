// atmsim/src/lib.rs

//! atmsim
//!
//! Single-session terminal simulator of an ATM serving one bank card:
//! card validation, PIN-gated access and balance operations with a
//! commission for cards issued by other banks.

pub mod atm;
pub mod card;
pub mod console;
pub mod constants;
pub mod error;
pub mod input;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
