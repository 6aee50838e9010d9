// atmsim/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range input to a constructor or operation.
    #[error("{0}")]
    InvalidArgument(String),

    /// Withdrawal larger than the balance.
    #[error("Insufficient funds on your bank account.")]
    InsufficientFunds,

    /// The input source ran dry mid-session.
    #[error("input closed before the session finished")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// True for the failures a menu option reports and retries.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::InsufficientFunds)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
