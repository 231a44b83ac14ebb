//! Stocks Client — a terminal picker that shows the latest quote for one of a fixed
//! set of companies. At start-up it selects the first company (or the one passed with
//! `--company`) and fetches its quote; afterwards every line typed on stdin can select
//! another company by row number, name or ticker.
//!
//! Usage example (CLI):
//! ```bash
//! stocks_client --base-url http://127.0.0.1:8080 --company tesla
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`.
#![warn(missing_docs)]
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use stocks_client::app::{App, AppEvent, spawn_input_reader};
use stocks_client::args::Args;
use stocks_client::fetcher::QuoteFetcher;
use stocks_client::transport::ReqwestTransport;
use stocks_common::{CompanyDirectory, Result, StocksError};

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the session. Returns `false` when `--once` ended on a failure outcome.
fn run(args: Args) -> Result<bool> {
    let directory = CompanyDirectory::new();
    let company = match args.company.as_deref() {
        Some(input) => directory.resolve(input)?,
        None => directory
            .get(0)
            .ok_or_else(|| StocksError::Format("company directory is empty".to_string()))?,
    };

    let transport = ReqwestTransport::new().map_err(|e| StocksError::Format(e.to_string()))?;
    let fetcher = QuoteFetcher::new(transport, args.base_url.trim());
    info!("Quote service: {}", fetcher.base_url());

    let mut app = App::new(fetcher, io::stdout());
    if args.once {
        app = app.stop_when_idle();
    } else {
        let shutdown_tx = app.sender();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            let _ = shutdown_tx.send(AppEvent::Shutdown);
        })
        .map_err(|e| StocksError::Format(format!("Error setting Ctrl+C handler: {e}")))?;
        spawn_input_reader(BufReader::new(io::stdin()), directory, app.sender());
    }

    app.select(company)?;
    app.run()?;

    Ok(!args.once || app.succeeded())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
