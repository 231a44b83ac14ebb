//! Display state of the quote panel.
//!
//! `QuoteView` holds what the screen shows: the six quote fields, the colour of
//! the change field, the loading indicator and a pending alert. It is only ever
//! mutated by the event loop thread.
use std::fmt;

use stocks_common::{FetchOutcome, Quote};

/// Text shown in every field while no quote is displayed.
pub const PLACEHOLDER: &str = "-";

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Colour of the price change field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeColor {
    /// No quote shown.
    Neutral,
    /// Zero or positive change, green.
    Gain,
    /// Negative change, red.
    Loss,
}

impl ChangeColor {
    /// Colour for a price change: negative is a loss, zero and above a gain.
    pub fn for_change(price_change: f64) -> Self {
        if price_change < 0.0 {
            ChangeColor::Loss
        } else {
            ChangeColor::Gain
        }
    }

    fn paint(&self, text: &str) -> String {
        match self {
            ChangeColor::Neutral => text.to_string(),
            ChangeColor::Gain => format!("{ANSI_GREEN}{text}{ANSI_RESET}"),
            ChangeColor::Loss => format!("{ANSI_RED}{text}{ANSI_RESET}"),
        }
    }
}

/// A modal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Heading; empty for untitled alerts.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Alert {
    /// An alert with the given heading and body.
    pub fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }

    /// Greeting shown by the `info` command.
    pub fn info() -> Self {
        Alert::new(
            "Hello, dear user",
            "In this application you can get information about companies that are listed on the stock exchange.",
        )
    }

    /// Alert for a failed fetch, `None` for a success.
    pub fn for_outcome(outcome: &FetchOutcome) -> Option<Self> {
        match outcome {
            FetchOutcome::Success(_) => None,
            FetchOutcome::NetworkFailure => Some(Alert::new("Sorry", "Network error!")),
            FetchOutcome::ParseFailure(message) if message.is_empty() => {
                Some(Alert::new("", "Invalid JSON format"))
            }
            FetchOutcome::ParseFailure(message) => {
                Some(Alert::new("", format!("! JSON parsing error: {message}")))
            }
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "[!] {}", self.message)
        } else {
            write!(f, "[!] {}: {}", self.title, self.message)
        }
    }
}

/// Current contents of the quote panel.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
    /// Company name as reported by the endpoint.
    pub company_name: String,
    /// Ticker symbol as reported by the endpoint.
    pub symbol: String,
    /// Primary exchange.
    pub exchange: String,
    /// Industry sector.
    pub sector: String,
    /// Latest price, shortest round-trip formatting.
    pub price: String,
    /// Change against the previous close.
    pub price_change: String,
    /// Colour of `price_change`.
    pub change_color: ChangeColor,
    /// Loading indicator is running.
    pub loading: bool,
    /// Alert waiting to be shown.
    pub alert: Option<Alert>,
}

impl Default for QuoteView {
    fn default() -> Self {
        Self {
            company_name: PLACEHOLDER.to_string(),
            symbol: PLACEHOLDER.to_string(),
            exchange: PLACEHOLDER.to_string(),
            sector: PLACEHOLDER.to_string(),
            price: PLACEHOLDER.to_string(),
            price_change: PLACEHOLDER.to_string(),
            change_color: ChangeColor::Neutral,
            loading: false,
            alert: None,
        }
    }
}

impl QuoteView {
    /// Reset every field to the placeholder and start the loading indicator.
    pub fn begin_refresh(&mut self) {
        *self = QuoteView {
            loading: true,
            ..QuoteView::default()
        };
    }

    /// Stop the loading indicator and show the outcome.
    ///
    /// A failure leaves the placeholders in place and raises an alert.
    pub fn apply(&mut self, outcome: &FetchOutcome) {
        self.loading = false;
        match outcome {
            FetchOutcome::Success(quote) => self.show_quote(quote),
            failure => self.alert = Alert::for_outcome(failure),
        }
    }

    fn show_quote(&mut self, quote: &Quote) {
        self.company_name = quote.company_name.clone();
        self.symbol = quote.symbol.clone();
        self.exchange = quote.exchange.clone();
        self.sector = quote.sector.clone();
        self.price = quote.price.to_string();
        self.price_change = quote.price_change.to_string();
        self.change_color = ChangeColor::for_change(quote.price_change);
        self.alert = None;
    }

    /// Remove and return the pending alert, if any.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    /// Render the panel as terminal text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Company:  {}\n", self.company_name));
        out.push_str(&format!("Symbol:   {}\n", self.symbol));
        out.push_str(&format!("Exchange: {}\n", self.exchange));
        out.push_str(&format!("Sector:   {}\n", self.sector));
        out.push_str(&format!("Price:    {}\n", self.price));
        out.push_str(&format!(
            "Change:   {}\n",
            self.change_color.paint(&self.price_change)
        ));
        if self.loading {
            out.push_str("Loading...\n");
        }
        out
    }
}
