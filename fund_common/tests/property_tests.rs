//! Property tests for batching and equal-weight allocation.

use fund_common::{FundError, Quote, Symbol, allocate, batch};
use proptest::prelude::*;

fn arb_symbols(max_len: usize) -> impl Strategy<Value = Vec<Symbol>> {
    prop::collection::vec("[A-Z]{1,5}", 0..max_len).prop_map(|names| {
        names
            .into_iter()
            .map(|n| n.parse::<Symbol>().unwrap())
            .collect()
    })
}

fn arb_price() -> impl Strategy<Value = f64> {
    (0.01..5000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_quotes() -> impl Strategy<Value = Vec<Quote>> {
    prop::collection::vec(("[A-Z]{1,5}", arb_price(), 0.0..3.0e12_f64), 1..60).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(name, price, cap)| Quote::new(name.parse().unwrap(), price, cap))
                .collect()
        },
    )
}

// ── Batching ─────────────────────────────────────────────────────────

proptest! {
    /// ceil(L/N) batches, all full except possibly the last.
    #[test]
    fn batch_count_and_sizes(symbols in arb_symbols(350), size in 1usize..150) {
        let batches: Vec<_> = batch(&symbols, size).collect();
        prop_assert_eq!(batches.len(), symbols.len().div_ceil(size));
        if let Some((last, full)) = batches.split_last() {
            for b in full {
                prop_assert_eq!(b.len(), size);
            }
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
    }

    /// Concatenating the batches reproduces the input exactly.
    #[test]
    fn batches_concatenate_to_input(symbols in arb_symbols(350), size in 1usize..150) {
        let rejoined: Vec<Symbol> = batch(&symbols, size)
            .flat_map(|b| b.symbols().iter().cloned())
            .collect();
        prop_assert_eq!(rejoined, symbols);
    }
}

// ── Allocation ───────────────────────────────────────────────────────

proptest! {
    /// One row per quote, same order, shares = floor((B/K) / price).
    #[test]
    fn allocation_is_equal_weight(quotes in arb_quotes(), budget in 1.0..1.0e9_f64) {
        let rows = allocate(&quotes, budget).unwrap();
        prop_assert_eq!(rows.len(), quotes.len());

        let position = budget / quotes.len() as f64;
        for (row, quote) in rows.iter().zip(&quotes) {
            prop_assert_eq!(&row.symbol, &quote.symbol);
            prop_assert_eq!(row.price, quote.price);
            prop_assert_eq!(row.market_cap, quote.market_cap);
            prop_assert_eq!(row.shares_to_buy, (position / quote.price).floor() as u64);
        }
    }

    /// A single non-positive price fails the whole allocation and is named.
    #[test]
    fn non_positive_price_is_named(
        mut quotes in arb_quotes(),
        bad_price in -100.0..=0.0_f64,
        pick in any::<prop::sample::Index>(),
    ) {
        let at = pick.index(quotes.len());
        quotes[at].price = bad_price;
        let expected = quotes
            .iter()
            .find(|q| q.price <= 0.0)
            .map(|q| q.symbol.to_string())
            .unwrap();

        match allocate(&quotes, 10_000.0) {
            Err(FundError::InvalidQuote { symbol, .. }) => prop_assert_eq!(symbol, expected),
            other => prop_assert!(false, "expected InvalidQuote, got {:?}", other),
        }
    }
}
