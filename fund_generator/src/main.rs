//! Equal-Weight Index Fund Generator — fetches the latest price and market
//! capitalization for every ticker in a CSV file, asks for the portfolio value,
//! and writes a spreadsheet with the number of shares to buy for an
//! equal-weight portfolio.
//!
//! Usage example (CLI):
//! ```bash
//! IEX_CLOUD_API_TOKEN=pk_... fund_generator --path ./SP500.csv --output "Recommended Trades.xlsx"
//! ```
//!
//! The run is a straight pipeline: load symbols → fetch quotes in batches →
//! read budget (one retry) → allocate → write report. Any error aborts the run
//! before the report is written.
#![warn(missing_docs)]
mod args;
mod config;
mod iex;
mod model;
mod report;

use crate::args::Args;
use crate::config::resolve_token;
use crate::iex::IexClient;
use crate::report::{ReportStyle, ReportWriter};
use clap::Parser;
use fund_common::budget::{BudgetPrompt, parse_budget};
use fund_common::{
    AllocationRow, FetchMode, FundError, Quote, QuoteSource, Result, Symbol, SymbolParser,
    allocate, fetch_quotes,
};
use log::{error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

fn main() -> Result<(), FundError> {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("Run aborted: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Runs the whole pipeline for the parsed `args`.
fn run(args: &Args) -> Result<()> {
    let token_file = args.token_file.as_deref().map(normalize_path);
    let token = resolve_token(args.token.as_deref(), token_file.as_deref())?;
    let client = IexClient::new(&args.base_url, token)?;

    let symbols = load_symbols(&normalize_path(&args.path))?;
    let quotes = fetch_table(&client, &symbols, args)?;
    let budget = read_budget(args.portfolio_size.as_deref())?;
    let rows = allocate(&quotes, budget)?;
    emit(&rows, &normalize_path(&args.output))?;

    info!("Done: {} recommended trades", rows.len());
    Ok(())
}

fn load_symbols(path: &Path) -> Result<Vec<Symbol>> {
    if !is_file_exist(path) {
        return Err(FundError::InvalidInput(format!(
            "ticker file {} does not exist",
            path.display()
        )));
    }
    let file = File::open(path)?;
    let symbols = Symbol::parse_from_csv(BufReader::new(file))?;
    info!("Loaded {} symbols from {}", symbols.len(), path.display());
    Ok(symbols)
}

fn fetch_table<S: QuoteSource>(source: &S, symbols: &[Symbol], args: &Args) -> Result<Vec<Quote>> {
    let mode = if args.parallel {
        FetchMode::Parallel
    } else {
        FetchMode::Sequential
    };
    fetch_quotes(source, symbols, args.batch_size, mode)
}

/// Uses `--portfolio-size` when given, otherwise prompts on the terminal.
fn read_budget(preset: Option<&str>) -> Result<f64> {
    let budget = match preset {
        Some(raw) => parse_budget(raw)?,
        None => BudgetPrompt::new(io::stdin().lock(), io::stdout()).read()?,
    };
    info!("Portfolio value: {:.2}", budget);
    Ok(budget)
}

fn emit(rows: &[AllocationRow], output: &Path) -> Result<()> {
    ReportWriter::new(ReportStyle::default()).write(rows, output)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
