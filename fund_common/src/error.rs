//! Error types shared by the library and the generator binary.
//!
//! The `FundError` enum covers every way a run can fail: bad input lists,
//! unparsable budgets, unusable quotes, provider failures, and report output.
//! Every variant is fatal to the run; the only local recovery is the single
//! budget re-prompt in [`crate::budget`].
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the binary.
#[derive(Error, Debug)]
pub enum FundError {
    /// Empty, duplicated, or malformed symbol list, or an empty quote set.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Budget that is not a finite positive number.
    #[error("Invalid portfolio value: {0}")]
    InvalidBudget(String),

    /// Quote whose price cannot be used to size a position.
    #[error("Invalid quote for {symbol}: {reason}")]
    InvalidQuote {
        /// The offending ticker symbol.
        symbol: String,
        /// Why the price cannot be used.
        reason: String,
    },

    /// Network/provider failure or a symbol missing from the provider response.
    #[error("Quote fetch failed: {0}")]
    FetchFailure(String),

    /// Missing or unreadable configuration, such as the API credential.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure while rendering or saving the spreadsheet report.
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error originating from the standard library (files, stdin/stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while reading the ticker CSV file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl FundError {
    /// Shorthand for an [`FundError::InvalidQuote`] naming `symbol`.
    pub fn invalid_quote(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        FundError::InvalidQuote {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}
