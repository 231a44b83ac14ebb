//! The fixed company directory shown in the picker.
//!
//! Companies are kept as an explicit ordered list of (display name, ticker)
//! pairs so that picker rows map to companies by position. The table is a
//! compile-time constant and never changes at runtime.
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::error::StocksError;

/// Ticker symbols of the companies in the directory.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    AAPL,
    MSFT,
    GOOG,
    AMZN,
    FB,
    TSLA,
}

impl Ticker {
    /// Uppercase symbol as used in quote URLs.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A picker row: a display name and its ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    /// Display name shown in the picker. Unique within the directory.
    pub name: &'static str,
    /// Ticker requested from the quote endpoint.
    pub ticker: Ticker,
}

static COMPANIES: [Company; 6] = [
    Company { name: "Apple", ticker: Ticker::AAPL },
    Company { name: "Microsoft", ticker: Ticker::MSFT },
    Company { name: "Google", ticker: Ticker::GOOG },
    Company { name: "Amazon", ticker: Ticker::AMZN },
    Company { name: "Facebook", ticker: Ticker::FB },
    Company { name: "Tesla", ticker: Ticker::TSLA },
];

/// Ordered, immutable company table.
#[derive(Debug, Clone, Copy)]
pub struct CompanyDirectory {
    companies: &'static [Company],
}

impl Default for CompanyDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyDirectory {
    /// The built-in directory.
    pub fn new() -> Self {
        Self {
            companies: &COMPANIES,
        }
    }

    /// All companies in picker order.
    pub fn companies(&self) -> &'static [Company] {
        self.companies
    }

    /// Number of picker rows.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// `true` if the directory has no rows.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Company at a zero-based picker row.
    pub fn get(&self, row: usize) -> Option<&'static Company> {
        self.companies.get(row)
    }

    /// Zero-based picker row of a ticker.
    pub fn row_of(&self, ticker: Ticker) -> Option<usize> {
        self.companies.iter().position(|c| c.ticker == ticker)
    }

    /// Case-insensitive lookup by display name.
    pub fn by_name(&self, name: &str) -> Option<&'static Company> {
        let name = name.trim();
        self.companies
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup by ticker symbol.
    pub fn by_symbol(&self, symbol: &str) -> Option<&'static Company> {
        let ticker = symbol.trim().parse::<Ticker>().ok()?;
        self.companies.iter().find(|c| c.ticker == ticker)
    }

    /// Resolve a user-provided name or symbol.
    pub fn resolve(&self, input: &str) -> Result<&'static Company, StocksError> {
        self.by_name(input)
            .or_else(|| self.by_symbol(input))
            .ok_or_else(|| StocksError::CompanyNotFound(input.trim().to_string()))
    }
}
