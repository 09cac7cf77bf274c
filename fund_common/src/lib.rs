//!
//! Common types and logic for the equal-weight index fund generator.
//!
//! This crate aggregates:
//! - `error` — unified error type `FundError` used across the workspace.
//! - `result` — handy `Result<T, FundError>` alias.
//! - `tickers` — ticker symbols and the ticker file loader.
//! - `batch` — splitting symbols into provider-sized request batches.
//! - `quote` — fetched quotes and allocation rows.
//! - `fetch` — the `QuoteSource` contract and the batch fetch pipeline.
//! - `allocation` — equal-weight share counts.
//! - `budget` — portfolio budget parsing and the single-retry prompt.
//! - `net` — data provider constants.
#![warn(missing_docs)]
pub mod allocation;
pub mod batch;
pub mod budget;
pub mod error;
pub mod fetch;
pub mod net;
pub mod quote;
pub mod result;
pub mod tickers;

pub use allocation::allocate;
pub use batch::{Batch, batch};
pub use error::FundError;
pub use fetch::{FetchMode, QuoteSource, fetch_quotes};
pub use quote::{AllocationRow, Quote};
pub use result::Result;
pub use tickers::{Symbol, SymbolParser};
