//! Single-slot display surfaces

use std::sync::Mutex;
use tokio::sync::watch;

/// Sequence number handed to a search when it starts on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// A presentation slot that is replaced wholesale on every write.
///
/// Writes carry the ticket of the search that produced them; a write from a
/// search that is no longer the newest on this surface is dropped.
pub trait Surface: Send + Sync {
    /// Start a new search on this surface
    fn begin(&self) -> Ticket;

    /// Replace the content if `ticket` is still the newest. Returns whether
    /// the write was accepted.
    fn present(&self, ticket: Ticket, content: String) -> bool;
}

/// Surface backed by a `watch` channel; subscribers see the latest content
pub struct WatchSurface {
    tx: watch::Sender<String>,
    latest: Mutex<u64>,
}

impl WatchSurface {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        Self {
            tx,
            latest: Mutex::new(0),
        }
    }

    /// Receiver notified on every accepted write
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Content currently on the surface
    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }
}

impl Default for WatchSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for WatchSurface {
    fn begin(&self) -> Ticket {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        *latest += 1;
        Ticket(*latest)
    }

    fn present(&self, ticket: Ticket, content: String) -> bool {
        // Held across the send so a newer search cannot start in between
        let latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        if *latest != ticket.0 {
            return false;
        }
        self.tx.send_replace(content);
        true
    }
}
