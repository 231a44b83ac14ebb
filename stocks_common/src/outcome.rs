//! Classified result of a single quote fetch.
use crate::quote::Quote;

/// What a fetch produced. Created per request and consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// All required fields were present and well-typed.
    Success(Quote),
    /// Transport error, non-200 status, or no body.
    NetworkFailure,
    /// The body was not a JSON object with the required fields.
    ///
    /// Empty when the body parsed as JSON but was not an object.
    ParseFailure(String),
}

impl FetchOutcome {
    /// `true` for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    /// Classify a response body that arrived with status 200.
    pub fn from_body(body: &[u8]) -> Self {
        match Quote::from_json_slice(body) {
            Ok(quote) => FetchOutcome::Success(quote),
            Err(message) => FetchOutcome::ParseFailure(message),
        }
    }
}
