//! HTTP routing and serving for the stub quote service.
//!
//! `quote_router` maps `GET /1.0/stock/{symbol}/quote` onto a shared
//! `PriceBook`. `StubServer` owns the bound socket and runs any axum `Router`
//! on a tokio runtime, either on the calling thread (`serve`) or on a
//! background thread (`spawn`) for callers that are not async themselves.
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use log::{debug, error, info};
use stocks_common::endpoint::{QUOTE_PATH_SUFFIX, STOCK_PATH_PREFIX};
use stocks_common::{Result, StocksError, Ticker};

use crate::model::price_book::PriceBook;

/// Shared state handed to the quote handler.
pub type SharedBook = Arc<Mutex<PriceBook>>;

/// Route pattern of the quote resource, e.g. `/1.0/stock/:symbol/quote`.
pub fn quote_route() -> String {
    format!("{STOCK_PATH_PREFIX}:symbol{QUOTE_PATH_SUFFIX}")
}

/// Router serving quotes from `book`.
///
/// Unknown tickers and paths get 404, other methods on the quote path 405,
/// and a poisoned book 500.
pub fn quote_router(book: SharedBook) -> Router {
    Router::new()
        .route(&quote_route(), get(get_quote))
        .with_state(book)
}

async fn get_quote(State(book): State<SharedBook>, Path(symbol): Path<String>) -> Response {
    let Ok(ticker) = symbol.parse::<Ticker>() else {
        debug!("Unknown ticker requested: {}", symbol);
        return StatusCode::NOT_FOUND.into_response();
    };
    let body = match book.lock() {
        Ok(book) => book.quote(ticker),
        Err(e) => {
            error!("Price book lock poisoned: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    match body {
        Some(body) => {
            debug!("Serving {} at {}", ticker, body.payload.latest_price);
            Json(body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Bound listening socket for the stub quote service.
pub struct StubServer {
    listener: TcpListener,
}

impl StubServer {
    /// Bind to `bind_addr` (e.g., `127.0.0.1:8080`; port `0` picks a free port).
    pub fn bind(bind_addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(bind_addr)?;
        listener.set_nonblocking(true)?;
        Ok(Self { listener })
    }

    /// Address the server is listening on.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Base URL clients should use, e.g. `http://127.0.0.1:8080`.
    pub fn base_url(&self) -> Result<String> {
        Ok(format!("http://{}", self.local_addr()?))
    }

    /// Serve `router` on the calling thread until the server fails.
    pub fn serve(self, router: Router) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(self.listener)?;
            info!("Stub quote server is started on {}", listener.local_addr()?);
            axum::serve(listener, router).await?;
            Ok::<(), StocksError>(())
        })
    }

    /// Run `serve` on a background thread.
    pub fn spawn(self, router: Router) -> JoinHandle<()> {
        thread::spawn(move || {
            if let Err(e) = self.serve(router) {
                error!("Stub server stopped: {}", e);
            }
        })
    }
}
