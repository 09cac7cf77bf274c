//! Command-line arguments for the index fund generator.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use fund_common::net::{IEX_BASE_URL, IEX_BATCH_LIMIT};

/// Parsed command-line arguments.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV file with a `Symbol` column listing the tickers to buy.
    #[arg(long, default_value = "SP500.csv")]
    pub path: String,

    /// Path of the spreadsheet to write.
    #[arg(long, default_value = "Recommended Trades.xlsx")]
    pub output: String,

    /// IEX Cloud API token.
    #[arg(long, env = "IEX_CLOUD_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// File holding the IEX Cloud API token, used when `--token` is not given.
    #[arg(long)]
    pub token_file: Option<String>,

    /// Base URL of the IEX Cloud API (e.g. the sandbox endpoint).
    #[arg(long, default_value = IEX_BASE_URL)]
    pub base_url: String,

    /// Maximum number of symbols per provider request.
    #[arg(long, default_value_t = IEX_BATCH_LIMIT, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub batch_size: usize,

    /// Portfolio value; skips the interactive prompt when given.
    #[arg(long)]
    pub portfolio_size: Option<String>,

    /// Fetch all batches concurrently instead of one after another.
    #[arg(long)]
    pub parallel: bool,
}
