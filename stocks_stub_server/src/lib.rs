//! Stub quote service.
//!
//! Serves the quote endpoint shape (`GET /1.0/stock/{SYMBOL}/quote`) on a local
//! socket so the client can run without the public service:
//!
//! - `model::price_book` — company profiles and synthetic prices.
//! - `model::price_ticker` — background thread moving prices on an interval.
//! - `server` — axum router for the quote resource and the socket it is served on.
#![warn(missing_docs)]
pub mod model;
pub mod server;

pub use model::price_book::PriceBook;
pub use model::price_ticker::PriceTicker;
pub use server::{SharedBook, StubServer, quote_route, quote_router};
