//! Quote endpoint constants and URL helpers shared by client and stub server.
//!
//! The stub server builds its route pattern from the same prefix and suffix.

/// Host queried when no base URL is given on the command line.
pub const DEFAULT_BASE_URL: &str = "https://api.iextrading.com";
/// Versioned prefix of the stock resource.
pub const STOCK_PATH_PREFIX: &str = "/1.0/stock/";
/// Trailing segment of the quote resource.
pub const QUOTE_PATH_SUFFIX: &str = "/quote";

/// Build the quote URL for `symbol` under `base_url`.
///
/// The symbol is substituted as-is; tickers are uppercase ASCII and need no escaping.
pub fn quote_url(base_url: &str, symbol: &str) -> String {
    format!(
        "{}{}{}{}",
        base_url.trim_end_matches('/'),
        STOCK_PATH_PREFIX,
        symbol,
        QUOTE_PATH_SUFFIX
    )
}
