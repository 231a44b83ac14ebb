//! Stocks client: pick a company and view its latest quote.
//!
//! - `transport` — HTTP seam (`QuoteTransport`) and the reqwest implementation.
//! - `fetcher` — `QuoteFetcher`, request and outcome classification.
//! - `view` — panel state, placeholders, change colour and alerts.
//! - `input` — stdin command parsing.
//! - `app` — the single UI-owning event loop.
#![warn(missing_docs)]
pub mod app;
pub mod args;
pub mod fetcher;
pub mod input;
pub mod transport;
pub mod view;

pub use app::{App, AppEvent};
pub use fetcher::QuoteFetcher;
pub use transport::{QuoteTransport, ReqwestTransport};
