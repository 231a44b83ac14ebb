//! Background price updates.
//!
//! `PriceTicker::start` runs a thread that advances a shared `PriceBook` on a
//! fixed interval until the returned stop sender fires or is dropped.
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};
use log::{error, info};

use crate::model::price_book::PriceBook;

/// Handle to a running price ticker thread.
pub struct PriceTicker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl PriceTicker {
    /// Start ticking `book` every `interval`.
    pub fn start(book: Arc<Mutex<PriceBook>>, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let handle = thread::spawn(move || {
            info!(
                "Price ticker started (Thread ID: {:?}, interval: {:?})",
                thread::current().id(),
                interval
            );
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => match book.lock() {
                        Ok(mut book) => book.tick(),
                        Err(e) => {
                            error!("Price book lock poisoned: {}", e);
                            break;
                        }
                    },
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            info!("Price ticker stopping...");
        });
        Self { stop_tx, handle }
    }

    /// Stop the thread and wait for it to exit.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        let _ = self.handle.join();
    }
}
