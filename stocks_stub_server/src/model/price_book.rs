//! Synthetic quotes for the directory's companies.
//!
//! Each ticker carries a static profile (reported company name, exchange,
//! sector), a previous close and a latest price. `tick` moves every latest price
//! by a small random walk; the reported change is always measured against the
//! previous close.
use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use stocks_common::{QuotePayload, Ticker};

struct Profile {
    company_name: &'static str,
    exchange: &'static str,
    sector: &'static str,
    previous_close: f64,
}

fn profile(ticker: Ticker) -> Profile {
    let (company_name, exchange, sector, previous_close) = match ticker {
        Ticker::AAPL => ("Apple Inc.", "Nasdaq Global Select", "Technology", 156.30),
        Ticker::MSFT => ("Microsoft Corporation", "Nasdaq Global Select", "Technology", 105.68),
        Ticker::GOOG => ("Alphabet Inc.", "Nasdaq Global Select", "Technology", 1070.08),
        Ticker::AMZN => ("Amazon.com Inc.", "Nasdaq Global Select", "Consumer Cyclical", 1670.57),
        Ticker::FB => ("Facebook Inc.", "Nasdaq Global Select", "Technology", 147.47),
        Ticker::TSLA => ("Tesla Inc.", "Nasdaq Global Select", "Consumer Cyclical", 297.04),
    };
    Profile {
        company_name,
        exchange,
        sector,
        previous_close,
    }
}

/// Body served by the stub: the quote payload plus an update timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StubQuoteBody {
    /// Fields the client reads.
    #[serde(flatten)]
    pub payload: QuotePayload,
    /// UTC timestamp of the last price move, in milliseconds since the Unix epoch.
    pub latest_update: i64,
}

struct Entry {
    profile: Profile,
    latest_price: f64,
    latest_update: i64,
}

/// Latest synthetic price per ticker.
pub struct PriceBook {
    entries: HashMap<Ticker, Entry>,
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::new(&[
            Ticker::AAPL,
            Ticker::MSFT,
            Ticker::GOOG,
            Ticker::AMZN,
            Ticker::FB,
            Ticker::TSLA,
        ])
    }
}

impl PriceBook {
    /// A book for `tickers`, each starting at its previous close.
    pub fn new(tickers: &[Ticker]) -> Self {
        let now = Utc::now().timestamp_millis();
        let entries = tickers
            .iter()
            .map(|&ticker| {
                let profile = profile(ticker);
                let latest_price = profile.previous_close;
                (
                    ticker,
                    Entry {
                        profile,
                        latest_price,
                        latest_update: now,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Calculate the next synthetic price using a small random walk around `current_price`.
    ///
    /// The change is sampled uniformly from `[-1%, +1%]` and the result is clamped to a
    /// minimum positive value.
    pub fn next_price(current_price: f64) -> f64 {
        let mut rng = rand::rng();
        let change: f64 = rng.random_range(-0.01..0.01);
        let new_price = current_price * (1.0 + change);
        new_price.max(0.01)
    }

    /// Move every price one step.
    pub fn tick(&mut self) {
        let now = Utc::now().timestamp_millis();
        for entry in self.entries.values_mut() {
            entry.latest_price = round_cents(Self::next_price(entry.latest_price));
            entry.latest_update = now;
        }
    }

    /// Current body for `ticker`, or `None` if the book does not carry it.
    pub fn quote(&self, ticker: Ticker) -> Option<StubQuoteBody> {
        let entry = self.entries.get(&ticker)?;
        Some(StubQuoteBody {
            payload: QuotePayload {
                company_name: entry.profile.company_name.to_string(),
                symbol: ticker.to_string(),
                primary_exchange: entry.profile.exchange.to_string(),
                sector: entry.profile.sector.to_string(),
                latest_price: entry.latest_price,
                change: round_cents(entry.latest_price - entry.profile.previous_close),
            },
            latest_update: entry.latest_update,
        })
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
