//! Scanning on a worker thread.
//!
//! [`spawn`] moves the document onto its own thread and hands items back
//! over a zero-capacity channel: the worker blocks until the consumer takes
//! each item, so exactly one item is in flight at a time.
//!
//! Dropping the [`ItemStream`] disconnects the channel. The worker's next
//! send then fails and the thread exits, so a consumer may stop early
//! without leaving the producer stuck.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};

use crate::item::Item;
use crate::scanner::Scanner;

/// Items received from a scanner running on a worker thread.
pub struct ItemStream {
    items: Option<Receiver<Item<'static>>>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

/// Start scanning `input` on a new thread named after `name`.
pub fn spawn(name: &str, input: impl Into<Vec<u8>>) -> io::Result<ItemStream> {
    let input = input.into();
    let (tx, rx) = channel::bounded(0);
    let thread_name = format!("frontsplit-scan:{name}");
    let worker = thread::Builder::new().name(thread_name).spawn(move || {
        for item in Scanner::new(&input) {
            if tx.send(item.into_owned()).is_err() {
                log::debug!("scanner: consumer hung up, stopping");
                return;
            }
        }
    })?;

    Ok(ItemStream {
        items: Some(rx),
        worker: Some(worker),
        finished: false,
    })
}

impl Iterator for ItemStream {
    type Item = Item<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.items.as_ref()?.recv().ok();
        match &item {
            Some(item) if !item.kind.is_terminal() => {}
            _ => self.finished = true,
        }
        item
    }
}

impl Drop for ItemStream {
    fn drop(&mut self) {
        // Disconnect first so a blocked worker wakes up before we join it.
        self.items.take();
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            log::warn!("scanner: worker thread panicked");
        }
    }
}
