//! Command-line arguments for the stocks client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use stocks_common::endpoint::DEFAULT_BASE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote service; `/1.0/stock/{SYMBOL}/quote` is appended.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Company selected at start-up, by name or ticker. Defaults to the first picker row.
    #[clap(long)]
    pub company: Option<String>,

    /// Fetch the start-up company once, print it and exit.
    #[clap(long)]
    pub once: bool,
}
