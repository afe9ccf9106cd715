//! Collection run: plan pages, discover assets, download them.
//!
//! A run moves through [`Phase::Planning`], [`Phase::Discovering`],
//! [`Phase::Downloading`] and [`Phase::Done`] without going back. Any
//! listing page failure ends the run before a single asset is fetched;
//! asset failures are recorded per item and never end the run.
//!
//! With `jobs > 1`, downloads are spread over a bounded set of worker
//! threads pulling from a shared queue. The report keeps discovery order
//! either way.

use crate::collection::CollectionSpec;
use crate::error::{DownloadError, HarvestError};
use crate::events::{EventSender, HarvestEvent};
use crate::extract::{extract_assets, AssetItem};
use crate::fetch::Fetcher;
use crate::pagination::plan_for;
use crate::storage::DirectorySink;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, PoisonError};

/// Stage of a run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Planning,
    Discovering,
    Downloading,
    Done,
}

/// Knobs for one run.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Concurrent asset downloads; 0 and 1 both mean sequential.
    pub jobs: usize,
    /// When set to true, downloads not yet started are skipped.
    pub abort: Option<Arc<AtomicBool>>,
    /// Receives per-page and per-asset notifications.
    pub events: Option<EventSender>,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            abort: None,
            events: None,
        }
    }
}

/// What happened to one discovered asset.
#[derive(Debug)]
pub enum ItemStatus {
    Saved(PathBuf),
    Failed(DownloadError),
    /// Skipped because the run was aborted first.
    NotStarted,
}

#[derive(Debug)]
pub struct ItemOutcome {
    pub item: AssetItem,
    pub status: ItemStatus,
}

/// Result of a run that got past discovery.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Listing pages processed.
    pub pages: usize,
    /// One entry per discovered asset, in discovery order.
    pub outcomes: Vec<ItemOutcome>,
    /// True if the abort token stopped the download phase early.
    pub aborted: bool,
}

impl RunReport {
    pub fn discovered(&self) -> usize {
        self.outcomes.len()
    }

    pub fn saved(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Saved(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::Failed(_)))
    }

    pub fn not_started(&self) -> usize {
        self.count(|s| matches!(s, ItemStatus::NotStarted))
    }

    /// Failed items with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&AssetItem, &DownloadError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            ItemStatus::Failed(e) => Some((&o.item, e)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&ItemStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Runs one collection against a fetcher, saving assets into the collection's output directory.
pub struct Harvester<F> {
    spec: CollectionSpec,
    fetcher: F,
    sink: DirectorySink,
    options: HarvestOptions,
}

impl<F: Fetcher> Harvester<F> {
    pub fn new(spec: CollectionSpec, fetcher: F) -> Self {
        let sink = DirectorySink::new(spec.output_dir());
        Self {
            spec,
            fetcher,
            sink,
            options: HarvestOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HarvestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn spec(&self) -> &CollectionSpec {
        &self.spec
    }

    /// Plan and discover only: every asset on every listing page, in page order.
    pub fn discover(&self) -> Result<Vec<AssetItem>, HarvestError> {
        enter(Phase::Planning);
        let plan = plan_for(&self.spec);
        if plan.is_empty() {
            return Ok(Vec::new());
        }

        enter(Phase::Discovering);
        let mut items = Vec::new();
        for listing in &plan {
            if self.aborted() {
                return Err(HarvestError::Aborted);
            }
            let markup = self
                .fetcher
                .fetch_text(&listing.url)
                .map_err(|source| HarvestError::Discovery {
                    page: listing.page,
                    url: listing.url.clone(),
                    source,
                })?;
            let found = extract_assets(&markup);
            tracing::info!(page = listing.page, url = %listing.url, items = found.len(), "listing page parsed");
            self.emit(HarvestEvent::PageDiscovered {
                page: listing.page,
                url: listing.url.clone(),
                items: found.len(),
            });
            items.extend(found);
        }
        Ok(items)
    }

    /// Full run. Listing page failures and aborts during discovery are errors;
    /// download problems end up in the report.
    pub fn run(&self) -> Result<RunReport, HarvestError> {
        let pages = self.spec.pages().len() as usize;
        let items = self.discover()?;
        tracing::info!(pages, items = items.len(), "discovery complete");

        enter(Phase::Downloading);
        let mut report = self.download_all(items);
        report.pages = pages;

        enter(Phase::Done);
        tracing::info!(
            saved = report.saved(),
            failed = report.failed(),
            not_started = report.not_started(),
            "run finished"
        );
        Ok(report)
    }

    fn download_all(&self, items: Vec<AssetItem>) -> RunReport {
        let workers = self.options.jobs.max(1).min(items.len());
        let statuses = if workers <= 1 {
            self.download_sequential(&items)
        } else {
            self.download_parallel(&items, workers)
        };

        let remaining = statuses
            .iter()
            .filter(|s| matches!(s, ItemStatus::NotStarted))
            .count();
        let aborted = remaining > 0;
        if aborted {
            tracing::warn!(remaining, "run aborted; remaining downloads skipped");
            self.emit(HarvestEvent::Aborted { remaining });
        }

        RunReport {
            pages: 0,
            outcomes: items
                .into_iter()
                .zip(statuses)
                .map(|(item, status)| ItemOutcome { item, status })
                .collect(),
            aborted,
        }
    }

    fn download_sequential(&self, items: &[AssetItem]) -> Vec<ItemStatus> {
        let mut statuses = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if self.aborted() {
                statuses.extend(items[index..].iter().map(|_| ItemStatus::NotStarted));
                break;
            }
            statuses.push(self.download_one(index, item));
        }
        statuses
    }

    fn download_parallel(&self, items: &[AssetItem], workers: usize) -> Vec<ItemStatus> {
        let queue: Mutex<VecDeque<usize>> = Mutex::new((0..items.len()).collect());
        let (tx, rx) = mpsc::channel::<(usize, ItemStatus)>();

        std::thread::scope(|scope| {
            for _ in 0..workers {
                let tx = tx.clone();
                let queue = &queue;
                scope.spawn(move || loop {
                    if self.aborted() {
                        break;
                    }
                    let next = queue
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .pop_front();
                    let Some(index) = next else { break };
                    let status = self.download_one(index, &items[index]);
                    if tx.send((index, status)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut statuses: Vec<ItemStatus> = items.iter().map(|_| ItemStatus::NotStarted).collect();
        for (index, status) in rx {
            statuses[index] = status;
        }
        statuses
    }

    fn download_one(&self, index: usize, item: &AssetItem) -> ItemStatus {
        match self.fetch_and_store(item) {
            Ok(path) => {
                tracing::info!(url = %item.source_url, file = %item.filename, "saved");
                self.emit(HarvestEvent::AssetSaved {
                    index,
                    url: item.source_url.clone(),
                    filename: item.filename.clone(),
                    path: path.clone(),
                });
                ItemStatus::Saved(path)
            }
            Err(e) => {
                tracing::warn!(url = %item.source_url, file = %item.filename, error = %e, "failed to save");
                self.emit(HarvestEvent::AssetFailed {
                    index,
                    url: item.source_url.clone(),
                    filename: item.filename.clone(),
                    reason: e.to_string(),
                });
                ItemStatus::Failed(e)
            }
        }
    }

    fn fetch_and_store(&self, item: &AssetItem) -> Result<PathBuf, DownloadError> {
        let body = self.fetcher.fetch_bytes(&item.source_url)?;
        Ok(self.sink.write(&item.filename, &body)?)
    }

    fn aborted(&self) -> bool {
        self.options
            .abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn emit(&self, event: HarvestEvent) {
        if let Some(tx) = &self.options.events {
            // A dropped receiver only means nobody is listening.
            let _ = tx.send(event);
        }
    }
}

fn enter(phase: Phase) {
    tracing::debug!(?phase, "entering phase");
}
