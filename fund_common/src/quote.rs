//! Quote and allocation row types.
use serde::{Deserialize, Serialize};

use crate::tickers::Symbol;

/// Snapshot of price and market capitalization for one symbol at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Latest price.
    pub price: f64,
    /// Market capitalization.
    pub market_cap: f64,
}

impl Quote {
    /// Create a quote for `symbol`.
    pub fn new(symbol: Symbol, price: f64, market_cap: f64) -> Self {
        Self {
            symbol,
            price,
            market_cap,
        }
    }
}

/// One line of the recommended trades table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Price used to size the position.
    pub price: f64,
    /// Market capitalization, carried through for the report.
    pub market_cap: f64,
    /// Whole shares to buy for an equal-weight position.
    pub shares_to_buy: u64,
}
