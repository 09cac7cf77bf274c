//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `FundError`, so functions can simply
//! return `Result<T>`.
use crate::error::FundError;

/// Workspace-wide `Result` alias with `FundError` as the default error.
pub type Result<T, E = FundError> = std::result::Result<T, E>;
