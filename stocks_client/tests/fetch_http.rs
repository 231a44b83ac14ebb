//! End-to-end fetches through the reqwest transport against a local stub server.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::http::{StatusCode, Uri};
use crossbeam_channel::unbounded;
use stocks_client::fetcher::QuoteFetcher;
use stocks_client::transport::ReqwestTransport;
use stocks_common::{CompanyDirectory, FetchOutcome, Quote, Ticker};
use stocks_stub_server::{PriceBook, StubServer, quote_router};

const APPLE: &str = r#"{"companyName":"Apple Inc.","symbol":"AAPL","primaryExchange":"NASDAQ","sector":"Technology","latestPrice":150.25,"change":-1.5}"#;

/// Start a stub on a free port answering every request with `status` and `body`, returning its
/// base URL and the list of paths it has seen.
fn start_stub(status: StatusCode, body: impl Into<String>) -> (String, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);
    let body: String = body.into();
    let router = Router::new().fallback(move |uri: Uri| {
        recorded.lock().unwrap().push(uri.path().to_string());
        let body = body.clone();
        async move { (status, body) }
    });
    let server = StubServer::bind("127.0.0.1:0").unwrap();
    let base_url = server.base_url().unwrap();
    server.spawn(router);
    (base_url, seen)
}

fn fetcher(base_url: &str) -> QuoteFetcher<ReqwestTransport> {
    QuoteFetcher::new(ReqwestTransport::new().unwrap(), base_url)
}

#[test]
fn apple_quote_is_copied_verbatim() {
    let (base_url, _) = start_stub(StatusCode::OK, APPLE);
    let outcome = fetcher(&base_url).request(Ticker::AAPL);
    assert_eq!(
        outcome,
        FetchOutcome::Success(Quote {
            company_name: "Apple Inc.".to_string(),
            symbol: "AAPL".to_string(),
            exchange: "NASDAQ".to_string(),
            sector: "Technology".to_string(),
            price: 150.25,
            price_change: -1.5,
        })
    );
}

#[test]
fn every_company_hits_its_quote_path() {
    let (base_url, seen) = start_stub(StatusCode::OK, APPLE);
    let fetcher = fetcher(&base_url);
    for company in CompanyDirectory::new().companies() {
        fetcher.request(company.ticker);
    }
    let paths = seen.lock().unwrap().clone();
    assert_eq!(
        paths,
        [
            "/1.0/stock/AAPL/quote",
            "/1.0/stock/MSFT/quote",
            "/1.0/stock/GOOG/quote",
            "/1.0/stock/AMZN/quote",
            "/1.0/stock/FB/quote",
            "/1.0/stock/TSLA/quote",
        ]
    );
}

#[test]
fn error_statuses_are_network_failures() {
    for status in [StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
        let (base_url, _) = start_stub(status, APPLE);
        assert_eq!(
            fetcher(&base_url).request(Ticker::MSFT),
            FetchOutcome::NetworkFailure
        );
    }
}

#[test]
fn unreachable_service_is_a_network_failure() {
    let base_url = {
        let server = StubServer::bind("127.0.0.1:0").unwrap();
        server.base_url().unwrap()
    };
    assert_eq!(
        fetcher(&base_url).request(Ticker::GOOG),
        FetchOutcome::NetworkFailure
    );
}

#[test]
fn bad_bodies_are_parse_failures() {
    let (base_url, _) = start_stub(StatusCode::OK, "\"not an object\"");
    assert_eq!(
        fetcher(&base_url).request(Ticker::FB),
        FetchOutcome::ParseFailure(String::new())
    );

    let without_sector = APPLE.replace(r#""sector":"Technology","#, "");
    let (base_url, _) = start_stub(StatusCode::OK, without_sector);
    assert!(matches!(
        fetcher(&base_url).request(Ticker::AAPL),
        FetchOutcome::ParseFailure(message) if message.contains("sector")
    ));
}

#[test]
fn repeated_fetches_yield_equal_outcomes() {
    let (base_url, _) = start_stub(StatusCode::OK, APPLE);
    let fetcher = fetcher(&base_url);
    let (tx, rx) = unbounded();
    for _ in 0..2 {
        let tx = tx.clone();
        fetcher.fetch(Ticker::AAPL, move |outcome| tx.send(outcome).unwrap());
    }
    let first = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    let second = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(first.is_success());
    assert_eq!(first, second);
}

#[test]
fn synthetic_quotes_decode_with_extra_fields() {
    let server = StubServer::bind("127.0.0.1:0").unwrap();
    let base_url = server.base_url().unwrap();
    let book = Arc::new(Mutex::new(PriceBook::default()));
    server.spawn(quote_router(book));

    match fetcher(&base_url).request(Ticker::TSLA) {
        FetchOutcome::Success(quote) => {
            assert_eq!(quote.symbol, "TSLA");
            assert_eq!(quote.company_name, "Tesla Inc.");
            assert_eq!(quote.price_change, 0.0);
        }
        other => panic!("expected success, got {other:?}"),
    }
}
