//! Fetching quotes for the whole symbol list, batch by batch.
//!
//! A [`QuoteSource`] answers one batch request at a time. [`fetch_quotes`]
//! drives it over every batch and merges the answers into a single table in
//! input order. In parallel mode each batch runs on its own scoped thread and
//! reports back over a `crossbeam_channel`; results are slotted by batch index
//! so completion order never leaks into the table.
//!
//! Any failing batch aborts the whole fetch. There are no retries.

use std::collections::{HashMap, HashSet};
use std::thread;

use crossbeam_channel::unbounded;
use log::{debug, info};

use crate::batch::{Batch, batch};
use crate::error::FundError;
use crate::quote::Quote;
use crate::result::Result;
use crate::tickers::Symbol;

/// Provider of quotes for one batch of symbols.
pub trait QuoteSource: Sync {
    /// Human-readable name of this source, used in logs.
    fn name(&self) -> &str;

    /// Fetch quotes for every symbol in `batch`.
    ///
    /// The map is keyed by symbol text as returned by the provider. Symbols the
    /// provider did not answer are simply absent; [`fetch_quotes`] turns that
    /// into a `FetchFailure`.
    fn fetch_batch(&self, batch: &Batch<'_>) -> Result<HashMap<String, Quote>>;
}

/// How batches are dispatched to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One batch after another on the calling thread.
    #[default]
    Sequential,
    /// Every batch on its own thread.
    Parallel,
}

/// Fetch quotes for all `symbols`, `batch_size` symbols per request.
///
/// Returns exactly one quote per symbol, in the order of `symbols`. Symbols
/// must be distinct; a repeated symbol is `InvalidInput`.
pub fn fetch_quotes<S>(
    source: &S,
    symbols: &[Symbol],
    batch_size: usize,
    mode: FetchMode,
) -> Result<Vec<Quote>>
where
    S: QuoteSource + ?Sized,
{
    if symbols.is_empty() {
        return Err(FundError::InvalidInput(
            "no ticker symbols to fetch".to_string(),
        ));
    }
    let mut seen = HashSet::with_capacity(symbols.len());
    if let Some(repeated) = symbols.iter().find(|s| !seen.insert(*s)) {
        return Err(FundError::InvalidInput(format!(
            "duplicate ticker symbol {repeated}"
        )));
    }

    let batches = batch(symbols, batch_size);
    info!(
        "Fetching {} symbols from {} in {} batches ({:?})",
        symbols.len(),
        source.name(),
        batches.len(),
        mode
    );

    let per_batch = match mode {
        FetchMode::Sequential => batches
            .map(|b| fetch_one(source, &b))
            .collect::<Result<Vec<_>>>()?,
        FetchMode::Parallel => fetch_parallel(source, batches.collect())?,
    };

    let quotes: Vec<Quote> = per_batch.into_iter().flatten().collect();
    info!("Fetched {} quotes", quotes.len());
    Ok(quotes)
}

fn fetch_one<S>(source: &S, batch: &Batch<'_>) -> Result<Vec<Quote>>
where
    S: QuoteSource + ?Sized,
{
    debug!(
        "Requesting batch {} ({} symbols)",
        batch.index(),
        batch.len()
    );
    let answered = source.fetch_batch(batch)?;
    resolve_batch(batch, answered)
}

fn fetch_parallel<S>(source: &S, batches: Vec<Batch<'_>>) -> Result<Vec<Vec<Quote>>>
where
    S: QuoteSource + ?Sized,
{
    let total = batches.len();
    let (tx, rx) = unbounded::<(usize, Result<Vec<Quote>>)>();

    thread::scope(|scope| {
        for b in &batches {
            let tx = tx.clone();
            scope.spawn(move || {
                // The receiver outlives every sender inside this scope.
                let _ = tx.send((b.index(), fetch_one(source, b)));
            });
        }
    });
    drop(tx);

    let mut slots: Vec<Option<Vec<Quote>>> = vec![None; total];
    for (index, result) in rx.iter() {
        slots[index] = Some(result?);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| {
                FundError::FetchFailure(format!("batch {index} produced no result"))
            })
        })
        .collect()
}

/// Order a provider answer by the batch's symbols, failing on any missing one.
pub fn resolve_batch(
    batch: &Batch<'_>,
    mut answered: HashMap<String, Quote>,
) -> Result<Vec<Quote>> {
    batch
        .symbols()
        .iter()
        .map(|symbol| {
            answered.remove(symbol.as_str()).ok_or_else(|| {
                FundError::FetchFailure(format!("symbol {symbol} missing from provider response"))
            })
        })
        .collect()
}
