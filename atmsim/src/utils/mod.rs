//! Utilities for atmsim: small, reusable helpers used across the crate.
//!
//! Money rounding/commission arithmetic and the simulated processing
//! delay live here.

pub mod delay;
pub mod money;

pub use delay::*;
pub use money::*;
