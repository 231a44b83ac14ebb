//! Domain models for the stub quote server.
//!
//! - `price_book` — per-ticker company profile and synthetic prices.
//! - `price_ticker` — background thread that advances the price book on an interval.

pub mod price_book;
pub mod price_ticker;
