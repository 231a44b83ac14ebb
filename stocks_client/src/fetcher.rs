//! Quote fetching and outcome classification.
//!
//! `QuoteFetcher::fetch` runs one request on a dedicated background thread and
//! hands the classified `FetchOutcome` to a callback exactly once. The fetcher
//! holds no mutable state: overlapping fetches are independent and none of them
//! is cancelled, so their callbacks fire in completion order.
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{info, warn};
use stocks_common::endpoint::quote_url;
use stocks_common::{FetchOutcome, Ticker};

use crate::transport::{QuoteTransport, TransportError, TransportResponse};

/// HTTP status accepted as a successful quote response.
const STATUS_OK: u16 = 200;

/// Fetches quotes for tickers from a quote endpoint.
pub struct QuoteFetcher<T: QuoteTransport> {
    transport: Arc<T>,
    base_url: String,
}

impl<T: QuoteTransport> Clone for QuoteFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            base_url: self.base_url.clone(),
        }
    }
}

impl<T: QuoteTransport + 'static> QuoteFetcher<T> {
    /// Create a fetcher that queries `base_url` through `transport`.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: base_url.into(),
        }
    }

    /// Base URL the quote path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch on a background thread and pass the outcome to `on_outcome`.
    ///
    /// The callback runs on the background thread. Callers that own UI state
    /// should forward the outcome to their own event loop from inside it.
    pub fn fetch<F>(&self, ticker: Ticker, on_outcome: F) -> JoinHandle<()>
    where
        F: FnOnce(FetchOutcome) + Send + 'static,
    {
        let fetcher = self.clone();
        thread::spawn(move || {
            let outcome = fetcher.request(ticker);
            on_outcome(outcome);
        })
    }

    /// Perform the request on the current thread and classify the result.
    pub fn request(&self, ticker: Ticker) -> FetchOutcome {
        let url = quote_url(&self.base_url, ticker.as_str());
        info!("Requesting quote for {} from {}", ticker, url);
        let outcome = classify(self.transport.get(&url));
        match &outcome {
            FetchOutcome::Success(quote) => {
                info!("Quote for {}: price={} change={}", ticker, quote.price, quote.price_change)
            }
            FetchOutcome::NetworkFailure => warn!("Network failure fetching {}", ticker),
            FetchOutcome::ParseFailure(message) => {
                warn!("Invalid quote body for {}: {:?}", ticker, message)
            }
        }
        outcome
    }
}

/// Map a transport result onto a fetch outcome.
pub fn classify(response: Result<TransportResponse, TransportError>) -> FetchOutcome {
    let response = match response {
        Ok(response) => response,
        Err(e) => {
            warn!("{}", e);
            return FetchOutcome::NetworkFailure;
        }
    };
    if response.status != STATUS_OK {
        warn!("Unexpected HTTP status {}", response.status);
        return FetchOutcome::NetworkFailure;
    }
    match response.body {
        Some(body) => FetchOutcome::from_body(&body),
        None => FetchOutcome::NetworkFailure,
    }
}
