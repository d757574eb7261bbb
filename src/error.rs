//! Crate-level error type and `Result` alias for structured error handling.
//! Every variant carries the offending token as the user typed it so the CLI
//! can print a one-line diagnostic without extra context.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Token is neither an integer literal nor a known mnemonic.
    #[error("Unrecognized base: {tip}")]
    UnrecognizedBase { tip: String },

    /// Token parsed as an integer outside the supported radix range.
    #[error("Unsupported base: {tip}")]
    UnsupportedBase { tip: String },

    #[error("Target not in base {tip}.")]
    TargetNotInBase { tip: String },

    #[error("Target out of range.")]
    TargetOutOfRange,
}

impl Error {
    /// Rebind a target error to the source-base token the user typed.
    ///
    /// Target parsing only knows the resolved radix, so it reports the radix
    /// number; the API swaps in the original tip (e.g. `hex` instead of `16`).
    pub(crate) fn with_source_tip(self, tip: &str) -> Self {
        match self {
            Error::TargetNotInBase { .. } => Error::TargetNotInBase {
                tip: tip.to_string(),
            },
            other => other,
        }
    }
}
