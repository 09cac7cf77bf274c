//! Ticker symbols and the loader for the ticker list file.
//!
//! The ticker file is a CSV document with a `Symbol` header column, one ticker
//! per row. Other columns (company name, sector, ...) are ignored.

use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FundError;
use crate::result::Result;

/// Header of the column holding ticker symbols.
pub const SYMBOL_COLUMN: &str = "Symbol";

/// An opaque stock ticker symbol such as `AAPL` or `BRK.B`.
///
/// Symbols are sent to the provider comma-joined, so they may not contain
/// commas or whitespace.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Borrow the symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = FundError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FundError::InvalidInput("empty ticker symbol".to_string()));
        }
        if trimmed.contains(|c: char| c == ',' || c.is_whitespace()) {
            return Err(FundError::InvalidInput(format!(
                "ticker symbol {trimmed:?} contains a comma or whitespace"
            )));
        }
        Ok(Symbol(trimmed.to_string()))
    }
}

impl TryFrom<String> for Symbol {
    type Error = FundError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trait providing file parsing for symbols.
pub trait SymbolParser: Sized {
    /// Parses symbols from a CSV reader with a [`SYMBOL_COLUMN`] header.
    ///
    /// Blank cells are skipped. Returns `InvalidInput` when the column is
    /// missing, a symbol is malformed or repeated, or no symbol remains.
    fn parse_from_csv<R: Read>(reader: R) -> Result<Vec<Self>>;
}

/// One row of the ticker file; only the symbol column is read.
#[derive(Debug, Deserialize)]
struct SymbolRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
}

impl SymbolParser for Symbol {
    fn parse_from_csv<R: Read>(reader: R) -> Result<Vec<Self>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        if !headers.iter().any(|h| h == SYMBOL_COLUMN) {
            return Err(FundError::InvalidInput(format!(
                "ticker file has no {SYMBOL_COLUMN:?} column"
            )));
        }

        let mut seen = HashSet::new();
        let mut symbols = Vec::new();
        for record in csv_reader.deserialize() {
            let record: SymbolRecord = record?;
            if record.symbol.is_empty() {
                continue;
            }
            let symbol: Symbol = record.symbol.parse()?;
            if !seen.insert(symbol.clone()) {
                return Err(FundError::InvalidInput(format!(
                    "duplicate ticker symbol {symbol}"
                )));
            }
            symbols.push(symbol);
        }

        if symbols.is_empty() {
            return Err(FundError::InvalidInput(
                "ticker file contains no symbols".to_string(),
            ));
        }
        Ok(symbols)
    }
}
