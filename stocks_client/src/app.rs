//! The UI-owning event loop.
//!
//! Every change to the screen happens on the thread that calls `App::run`.
//! Other threads only post `AppEvent`s into the loop's channel:
//!
//! - the stdin reader posts parsed commands and end-of-input,
//! - the Ctrl+C handler posts `Shutdown`,
//! - each fetch thread posts its `FetchOutcome` from the fetch callback.
//!
//! Overlapping fetches are neither cancelled nor reordered, so the panel shows
//! whichever outcome was delivered last, which is not necessarily the one for
//! the most recent selection.
use std::io::{BufRead, Write};
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info, warn};
use stocks_common::{Company, CompanyDirectory, FetchOutcome, Result, StocksError};

use crate::fetcher::QuoteFetcher;
use crate::input::{HELP, UserCommand, parse_command};
use crate::transport::QuoteTransport;
use crate::view::{Alert, QuoteView};

/// Message delivered to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A parsed user command.
    Command(UserCommand),
    /// Input that did not parse as a command.
    Unrecognised(String),
    /// Outcome of a fetch started by a selection.
    Outcome(FetchOutcome),
    /// Stdin reached end of file.
    InputClosed,
    /// Stop immediately (Ctrl+C).
    Shutdown,
}

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next event.
    Continue,
    /// Leave the loop.
    Stop,
}

/// Picker, quote panel and fetcher wired to a single event loop.
pub struct App<T: QuoteTransport + 'static, W: Write> {
    directory: CompanyDirectory,
    fetcher: QuoteFetcher<T>,
    view: QuoteView,
    selected: Option<&'static Company>,
    last_outcome: Option<FetchOutcome>,
    in_flight: usize,
    closing: bool,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
    out: W,
}

impl<T: QuoteTransport + 'static, W: Write> App<T, W> {
    /// Create an app that renders to `out`.
    pub fn new(fetcher: QuoteFetcher<T>, out: W) -> Self {
        let (events_tx, events_rx) = unbounded();
        Self {
            directory: CompanyDirectory::new(),
            fetcher,
            view: QuoteView::default(),
            selected: None,
            last_outcome: None,
            in_flight: 0,
            closing: false,
            events_tx,
            events_rx,
            out,
        }
    }

    /// Stop as soon as every started fetch has delivered its outcome.
    pub fn stop_when_idle(mut self) -> Self {
        self.closing = true;
        self
    }

    /// A sender for posting events into the loop from other threads.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.events_tx.clone()
    }

    /// Current panel contents.
    pub fn view(&self) -> &QuoteView {
        &self.view
    }

    /// Currently selected picker row.
    pub fn selected(&self) -> Option<&'static Company> {
        self.selected
    }

    /// The most recently applied outcome.
    pub fn last_outcome(&self) -> Option<&FetchOutcome> {
        self.last_outcome.as_ref()
    }

    /// `true` when the most recently applied outcome was a success.
    ///
    /// A session that applied no outcome has not succeeded.
    pub fn succeeded(&self) -> bool {
        self.last_outcome
            .as_ref()
            .is_some_and(FetchOutcome::is_success)
    }

    /// The writer the panel is rendered to.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Select `company`: reset the panel, show the loading indicator and start a fetch.
    pub fn select(&mut self, company: &'static Company) -> Result<()> {
        info!("Selected {} ({})", company.name, company.ticker);
        self.selected = Some(company);
        self.view.begin_refresh();
        writeln!(self.out, "> {} ({})", company.name, company.ticker)?;
        self.draw()?;

        self.in_flight += 1;
        let tx = self.events_tx.clone();
        self.fetcher.fetch(company.ticker, move |outcome| {
            if let Err(e) = tx.send(AppEvent::Outcome(outcome)) {
                warn!("Dropping fetch outcome, event loop is gone: {}", e);
            }
        });
        Ok(())
    }

    /// Apply one event to the screen state.
    pub fn handle(&mut self, event: AppEvent) -> Result<Flow> {
        debug!("Event: {:?}", event);
        match event {
            AppEvent::Command(UserCommand::Select(company)) => self.select(company)?,
            AppEvent::Command(UserCommand::List) => self.list()?,
            AppEvent::Command(UserCommand::Info) => self.show_alert(&Alert::info())?,
            AppEvent::Command(UserCommand::Quit) | AppEvent::Shutdown => return Ok(Flow::Stop),
            AppEvent::Unrecognised(line) => {
                writeln!(self.out, "Unknown company or command: {}", line.trim())?;
                writeln!(self.out, "{HELP}")?;
            }
            AppEvent::Outcome(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.view.apply(&outcome);
                self.draw()?;
                if let Some(alert) = self.view.take_alert() {
                    self.show_alert(&alert)?;
                }
                self.last_outcome = Some(outcome);
            }
            AppEvent::InputClosed => {
                debug!("Input closed with {} fetch(es) in flight", self.in_flight);
                self.closing = true;
            }
        }
        if self.closing && self.in_flight == 0 {
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }

    /// Process events until a quit, shutdown, or idle close.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let event = self
                .events_rx
                .recv()
                .map_err(|e| StocksError::ChannelRecv(e.to_string()))?;
            if self.handle(event)? == Flow::Stop {
                break;
            }
        }
        info!("Event loop stopping...");
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        for (row, company) in self.directory.companies().iter().enumerate() {
            let marker = if self.selected == Some(company) { '*' } else { ' ' };
            writeln!(self.out, "{marker} {}. {} ({})", row + 1, company.name, company.ticker)?;
        }
        Ok(())
    }

    fn show_alert(&mut self, alert: &Alert) -> Result<()> {
        writeln!(self.out, "{alert}")?;
        self.out.flush()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        write!(self.out, "{}", self.view.render())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Spawn a thread that turns lines from `reader` into events for the loop.
pub fn spawn_input_reader<R>(reader: R, directory: CompanyDirectory, tx: Sender<AppEvent>)
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let event = match parse_command(&line, &directory) {
                Some(command) => AppEvent::Command(command),
                None => AppEvent::Unrecognised(line),
            };
            if tx.send(event).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{TransportError, TransportResponse};
    use crate::view::PLACEHOLDER;
    use std::io::Cursor;
    use std::time::Duration;
    use stocks_common::{Quote, Ticker};

    const APPLE: &str = r#"{"companyName":"Apple Inc.","symbol":"AAPL","primaryExchange":"NASDAQ","sector":"Technology","latestPrice":150.25,"change":-1.5}"#;

    const MICROSOFT: &str = r#"{"companyName":"Microsoft Corporation","symbol":"MSFT","primaryExchange":"NASDAQ","sector":"Technology","latestPrice":105.68,"change":0.42}"#;

    /// Serves `APPLE` for AAPL, 500 for MSFT, and garbage for anything else.
    struct ScriptedTransport;

    impl QuoteTransport for ScriptedTransport {
        fn get(&self, url: &str) -> std::result::Result<TransportResponse, TransportError> {
            if url.contains("/AAPL/") {
                Ok(TransportResponse::new(200, APPLE))
            } else if url.contains("/MSFT/") {
                Ok(TransportResponse::new(500, "oops"))
            } else {
                Ok(TransportResponse::new(200, "null"))
            }
        }
    }

    fn app() -> App<ScriptedTransport, Vec<u8>> {
        App::new(QuoteFetcher::new(ScriptedTransport, "http://stub"), Vec::new())
    }

    fn company(ticker: Ticker) -> &'static Company {
        let directory = CompanyDirectory::new();
        directory.get(directory.row_of(ticker).unwrap()).unwrap()
    }

    fn output(app: &App<ScriptedTransport, Vec<u8>>) -> String {
        String::from_utf8_lossy(app.output()).into_owned()
    }

    #[test]
    fn selection_shows_placeholders_until_outcome_is_handled() {
        let mut app = app().stop_when_idle();
        app.select(company(Ticker::AAPL)).unwrap();
        assert!(app.view().loading);
        assert_eq!(app.view().company_name, PLACEHOLDER);

        app.run().unwrap();
        assert!(!app.view().loading);
        assert_eq!(app.view().company_name, "Apple Inc.");
        assert_eq!(app.view().price_change, "-1.5");
        assert!(app.last_outcome().unwrap().is_success());
        assert!(output(&app).contains("> Apple (AAPL)"));
    }

    #[test]
    fn network_failure_shows_alert() {
        let mut app = app().stop_when_idle();
        app.select(company(Ticker::MSFT)).unwrap();
        app.run().unwrap();
        assert_eq!(app.last_outcome(), Some(&FetchOutcome::NetworkFailure));
        assert!(output(&app).contains("[!] Sorry: Network error!"));
        assert_eq!(app.view().price, PLACEHOLDER);
    }

    #[test]
    fn non_object_body_shows_invalid_format_alert() {
        let mut app = app().stop_when_idle();
        app.select(company(Ticker::TSLA)).unwrap();
        app.run().unwrap();
        assert!(output(&app).contains("[!] Invalid JSON format"));
    }

    #[test]
    fn last_delivered_outcome_wins() {
        let mut app = app();
        let tesla = Quote {
            company_name: "Tesla, Inc.".into(),
            symbol: "TSLA".into(),
            exchange: "NASDAQ".into(),
            sector: "Consumer Cyclical".into(),
            price: 300.0,
            price_change: 4.0,
        };
        app.handle(AppEvent::Outcome(FetchOutcome::NetworkFailure)).unwrap();
        app.handle(AppEvent::Outcome(FetchOutcome::Success(tesla.clone())))
            .unwrap();
        assert_eq!(app.view().symbol, "TSLA");
        assert_eq!(app.last_outcome(), Some(&FetchOutcome::Success(tesla)));
    }

    #[test]
    fn one_shot_result_follows_the_applied_outcome() {
        let mut success = app().stop_when_idle();
        assert!(!success.succeeded());
        success.select(company(Ticker::AAPL)).unwrap();
        success.run().unwrap();
        assert!(success.succeeded());

        let mut failure = app().stop_when_idle();
        failure.select(company(Ticker::MSFT)).unwrap();
        failure.run().unwrap();
        assert!(!failure.succeeded());
    }

    /// AAPL answers after a delay, MSFT at once.
    struct SlowAppleTransport;

    impl QuoteTransport for SlowAppleTransport {
        fn get(&self, url: &str) -> std::result::Result<TransportResponse, TransportError> {
            if url.contains("/AAPL/") {
                thread::sleep(Duration::from_millis(200));
                Ok(TransportResponse::new(200, APPLE))
            } else {
                Ok(TransportResponse::new(200, MICROSOFT))
            }
        }
    }

    #[test]
    fn slower_earlier_fetch_overwrites_later_selection() {
        let fetcher = QuoteFetcher::new(SlowAppleTransport, "http://stub");
        let mut app = App::new(fetcher, Vec::new()).stop_when_idle();
        app.select(company(Ticker::AAPL)).unwrap();
        app.select(company(Ticker::MSFT)).unwrap();
        app.run().unwrap();

        assert_eq!(app.selected().map(|c| c.ticker), Some(Ticker::MSFT));
        assert_eq!(app.view().symbol, "AAPL");
        assert_eq!(app.view().company_name, "Apple Inc.");
    }

    #[test]
    fn quit_and_shutdown_stop_the_loop() {
        let mut app = app();
        assert_eq!(
            app.handle(AppEvent::Command(UserCommand::Quit)).unwrap(),
            Flow::Stop
        );
        assert_eq!(app.handle(AppEvent::Shutdown).unwrap(), Flow::Stop);
    }

    #[test]
    fn list_marks_selected_row() {
        let mut app = app().stop_when_idle();
        app.select(company(Ticker::AAPL)).unwrap();
        app.run().unwrap();
        app.handle(AppEvent::Command(UserCommand::List)).unwrap();
        let out = output(&app);
        assert!(out.contains("* 1. Apple (AAPL)"));
        assert!(out.contains("  6. Tesla (TSLA)"));
    }

    #[test]
    fn input_reader_drives_the_loop_to_completion() {
        let mut app = app();
        let input = Cursor::new("info\nnope\n1\n");
        spawn_input_reader(input, CompanyDirectory::new(), app.sender());
        app.run().unwrap();

        let out = output(&app);
        assert!(out.contains("Hello, dear user"));
        assert!(out.contains("Unknown company or command: nope"));
        assert_eq!(app.selected().map(|c| c.ticker), Some(Ticker::AAPL));
        assert_eq!(app.view().exchange, "NASDAQ");
    }
}
