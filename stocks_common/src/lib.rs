//!
//! Common types and utilities shared by the stocks client and the stub server.
//!
//! This crate aggregates:
//! - `error` — unified error type `StocksError` used across the workspace.
//! - `result` — handy `Result<T, StocksError>` alias.
//! - `companies` — the ordered company directory and its tickers.
//! - `quote` — the `Quote` record and its JSON wire payload.
//! - `outcome` — `FetchOutcome`, the classified result of one fetch.
//! - `endpoint` — quote URL template and path helpers.
#![warn(missing_docs)]
pub mod companies;
pub mod endpoint;
pub mod error;
pub mod outcome;
pub mod quote;
pub mod result;

pub use companies::{Company, CompanyDirectory, Ticker};
pub use error::StocksError;
pub use outcome::FetchOutcome;
pub use quote::{Quote, QuotePayload};
pub use result::Result;
