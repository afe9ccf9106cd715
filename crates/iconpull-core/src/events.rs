//! Progress notifications emitted during a run.

use std::path::PathBuf;

/// One observable step of a run, sent to the caller as it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarvestEvent {
    /// A listing page was fetched and parsed.
    PageDiscovered { page: u32, url: String, items: usize },
    /// An asset was written to disk.
    AssetSaved {
        index: usize,
        url: String,
        filename: String,
        path: PathBuf,
    },
    /// An asset could not be fetched or written; the run continues.
    AssetFailed {
        index: usize,
        url: String,
        filename: String,
        reason: String,
    },
    /// The abort token was set; `remaining` downloads were never started.
    Aborted { remaining: usize },
}

/// Sending half handed to the pipeline. Unbounded so sends never block a worker.
pub type EventSender = tokio::sync::mpsc::UnboundedSender<HarvestEvent>;

/// Receiving half for the caller.
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<HarvestEvent>;

pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
