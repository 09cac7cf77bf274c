//! IEX Cloud batch response payload.
//!
//! The batch endpoint answers with a JSON object keyed by symbol, each entry
//! holding the requested data types:
//!
//! ```json
//! { "AAPL": { "quote": { "latestPrice": 189.3, "marketCap": 2950000000000 } } }
//! ```
//!
//! Only the two quote fields used for allocation are decoded.
use std::collections::HashMap;

use fund_common::{FundError, Quote, Result, Symbol};
use log::warn;
use serde::Deserialize;

/// Whole batch response, keyed by symbol.
pub type BatchResponse = HashMap<String, BatchEntry>;

/// Per-symbol entry of the batch response.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntry {
    /// Present when `quote` was among the requested types.
    pub quote: Option<IexQuote>,
}

/// The subset of the IEX quote object the generator needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IexQuote {
    /// Latest traded price.
    pub latest_price: Option<f64>,
    /// Market capitalization; null for some instruments.
    pub market_cap: Option<f64>,
}

/// Decode a batch response body into quotes keyed by symbol.
///
/// A missing quote or price is a `FetchFailure`; a missing market cap is
/// recorded as zero.
pub fn parse_batch_response(body: &str) -> Result<HashMap<String, Quote>> {
    let response: BatchResponse = serde_json::from_str(body)
        .map_err(|e| FundError::FetchFailure(format!("undecodable batch response: {}", e)))?;

    response
        .into_iter()
        .map(|(key, entry)| -> Result<(String, Quote)> {
            let quote = entry
                .quote
                .ok_or_else(|| FundError::FetchFailure(format!("no quote for {}", key)))?;
            let price = quote
                .latest_price
                .ok_or_else(|| FundError::FetchFailure(format!("no latest price for {}", key)))?;
            let market_cap = quote.market_cap.unwrap_or_else(|| {
                warn!("No market capitalization for {}, recording 0", key);
                0.0
            });
            let symbol: Symbol = key.parse().map_err(|e: FundError| {
                FundError::FetchFailure(format!("provider returned unusable symbol: {}", e))
            })?;
            Ok((key, Quote::new(symbol, price, market_cap)))
        })
        .collect()
}
