//! Stub quote server.
//!
//! Binds `127.0.0.1:<port>` and answers `GET /1.0/stock/{SYMBOL}/quote` for the
//! six directory tickers with synthetic quotes that drift every `--tick-ms`.
//!
//! ```bash
//! stocks_stub_server --port 8080
//! stocks_client --base-url http://127.0.0.1:8080
//! ```
#![warn(missing_docs)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use log::info;
use stocks_common::Result;
use stocks_stub_server::{PriceBook, PriceTicker, StubServer, quote_router};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Local TCP port to listen on.
    #[clap(long, default_value_t = 8080)]
    port: u16,

    /// Interval between price updates, in milliseconds.
    #[clap(long, default_value_t = 500)]
    tick_ms: u64,
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let book = Arc::new(Mutex::new(PriceBook::default()));
    let ticker = PriceTicker::start(Arc::clone(&book), Duration::from_millis(args.tick_ms));

    let server = StubServer::bind(&format!("127.0.0.1:{}", args.port))?;
    info!("Try: curl {}/1.0/stock/AAPL/quote", server.base_url()?);
    let result = server.serve(quote_router(book));

    ticker.stop();
    result
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
