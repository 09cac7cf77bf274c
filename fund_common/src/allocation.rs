//! Equal-weight allocation.
//!
//! Every holding receives the same dollar position, `budget / count`, and the
//! share count for a holding is that position divided by its price, floored to
//! a whole share.

use crate::error::FundError;
use crate::quote::{AllocationRow, Quote};
use crate::result::Result;

/// Dollar amount allotted to each of `count` holdings.
pub fn position_size(budget: f64, count: usize) -> Result<f64> {
    if count == 0 {
        return Err(FundError::InvalidInput(
            "cannot allocate across zero quotes".to_string(),
        ));
    }
    if !budget.is_finite() || budget <= 0.0 {
        return Err(FundError::InvalidBudget(format!(
            "{budget} is not a positive number"
        )));
    }
    Ok(budget / count as f64)
}

/// Compute the equal-weight share count for every quote, preserving order.
///
/// Fails with `InvalidQuote` for the first quote whose price is not a positive
/// finite number, or whose share count does not fit in a `u64`; no rows are
/// produced in that case.
pub fn allocate(quotes: &[Quote], budget: f64) -> Result<Vec<AllocationRow>> {
    let position = position_size(budget, quotes.len())?;

    let mut rows = Vec::with_capacity(quotes.len());
    for quote in quotes {
        if !quote.price.is_finite() || quote.price <= 0.0 {
            return Err(FundError::invalid_quote(
                quote.symbol.as_str(),
                "price must be positive",
            ));
        }
        rows.push(AllocationRow {
            symbol: quote.symbol.clone(),
            price: quote.price,
            market_cap: quote.market_cap,
            shares_to_buy: whole_shares(position, quote)?,
        });
    }
    Ok(rows)
}

/// `floor(position / price)`, rejected when it is not representable as `u64`.
fn whole_shares(position: f64, quote: &Quote) -> Result<u64> {
    let shares = (position / quote.price).floor();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range.
    if !shares.is_finite() || shares >= u64::MAX as f64 {
        return Err(FundError::invalid_quote(
            quote.symbol.as_str(),
            format!("share count {shares} is out of range"),
        ));
    }
    Ok(shares as u64)
}
