//! Quote record and its JSON wire shape.
//!
//! The quote endpoint answers with a JSON object carrying many fields; only six
//! are required and the rest are ignored. `QuotePayload` mirrors the wire names
//! and converts one-to-one into the domain `Quote`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Latest quote for a single company.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Company display name as reported by the endpoint (e.g., `Apple Inc.`).
    pub company_name: String,
    /// Ticker symbol as reported by the endpoint.
    pub symbol: String,
    /// Primary listing exchange.
    pub exchange: String,
    /// Industry sector.
    pub sector: String,
    /// Latest traded price.
    pub price: f64,
    /// Absolute change against the previous close.
    pub price_change: f64,
}

/// Quote endpoint JSON body. Unknown fields are skipped on decode.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub company_name: String,
    pub symbol: String,
    pub primary_exchange: String,
    pub sector: String,
    pub latest_price: f64,
    pub change: f64,
}

impl From<QuotePayload> for Quote {
    fn from(payload: QuotePayload) -> Self {
        Quote {
            company_name: payload.company_name,
            symbol: payload.symbol,
            exchange: payload.primary_exchange,
            sector: payload.sector,
            price: payload.latest_price,
            price_change: payload.change,
        }
    }
}

impl Quote {
    /// Decode a quote from a response body.
    ///
    /// On failure returns a diagnostic message: the decoder's error text when
    /// the body is not JSON or a required field is missing or mistyped, and an
    /// empty string when the body is valid JSON but not an object.
    pub fn from_json_slice(body: &[u8]) -> Result<Quote, String> {
        let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
        if !value.is_object() {
            return Err(String::new());
        }
        let payload: QuotePayload = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Ok(payload.into())
    }
}
