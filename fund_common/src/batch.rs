//! Splitting the symbol list into provider-sized request batches.
//!
//! Batches partition the input in order with no overlap: concatenating every
//! batch reproduces the input exactly, and only the last batch may be short.

use std::iter::FusedIterator;
use std::slice::Chunks;

use crate::tickers::Symbol;

/// A bounded, ordered group of symbols sent together in one provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    index: usize,
    symbols: &'a [Symbol],
}

impl<'a> Batch<'a> {
    /// Position of this batch in the batch sequence, starting at zero.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Symbols in this batch, in input order.
    pub fn symbols(&self) -> &'a [Symbol] {
        self.symbols
    }

    /// Number of symbols in this batch.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for batches yielded by [`batch`].
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Comma-joined form used in provider requests, e.g. `AAPL,MSFT`.
    pub fn joined(&self) -> String {
        self.symbols
            .iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Lazy iterator over the batches of a symbol slice.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Chunks<'a, Symbol>,
    next_index: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbols = self.chunks.next()?;
        let index = self.next_index;
        self.next_index += 1;
        Some(Batch { index, symbols })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}

/// Split `symbols` into consecutive batches of at most `size` symbols.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn batch(symbols: &[Symbol], size: usize) -> Batches<'_> {
    assert!(size > 0, "batch size must be positive");
    Batches {
        chunks: symbols.chunks(size),
        next_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    fn names(batch: &Batch<'_>) -> Vec<String> {
        batch.symbols().iter().map(Symbol::to_string).collect()
    }

    #[test]
    fn splits_five_symbols_into_pairs() {
        let input = symbols(&["A", "B", "C", "D", "E"]);
        let batches: Vec<_> = batch(&input, 2).collect();
        let grouped: Vec<Vec<String>> = batches.iter().map(names).collect();
        assert_eq!(grouped, vec![vec!["A", "B"], vec!["C", "D"], vec!["E"]]);
        let indices: Vec<usize> = batches.iter().map(Batch::index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn empty_input_yields_no_batches() {
        assert_eq!(batch(&[], 100).count(), 0);
    }

    #[test]
    fn reports_exact_length() {
        let input = symbols(&["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(batch(&input, 3).len(), 3);
        assert_eq!(batch(&input, 7).len(), 1);
        assert_eq!(batch(&input, 100).len(), 1);
    }

    #[test]
    fn joined_is_comma_separated() {
        let input = symbols(&["AAPL", "MSFT", "BRK.B"]);
        let first = batch(&input, 100).next().unwrap();
        assert_eq!(first.joined(), "AAPL,MSFT,BRK.B");
    }

    #[test]
    #[should_panic(expected = "batch size must be positive")]
    fn zero_size_fails_fast() {
        let input = symbols(&["A"]);
        let _ = batch(&input, 0);
    }
}
