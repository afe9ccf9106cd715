//! `iconpull fetch <slug>` – discover and download a collection.

use anyhow::{Context, Result};
use iconpull_core::config::IconpullConfig;
use iconpull_core::events::{self, EventReceiver};
use iconpull_core::storage::prepare_output_dir;
use iconpull_core::{CollectionSpec, CurlFetcher, HarvestError, HarvestEvent, HarvestOptions, Harvester};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::{FetchArgs, RunStatus};

pub async fn run_fetch(cfg: &IconpullConfig, args: FetchArgs) -> Result<RunStatus> {
    let spec = args.collection.to_spec(cfg)?;
    print_banner(&spec, args.name.as_deref());

    prepare_output_dir(spec.output_dir(), args.overwrite)?;

    let abort = Arc::new(AtomicBool::new(false));
    let abort_signal = Arc::clone(&abort);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("Interrupted; finishing downloads in flight and skipping the rest.");
            abort_signal.store(true, Ordering::Relaxed);
        }
    });

    let (events_tx, events_rx) = events::channel();
    let printer = tokio::spawn(print_events(events_rx));

    let options = HarvestOptions {
        jobs: args.jobs.unwrap_or(cfg.jobs),
        abort: Some(abort),
        events: Some(events_tx),
    };
    let harvester = Harvester::new(spec, CurlFetcher::new(cfg.http())).with_options(options);
    let result = tokio::task::spawn_blocking(move || harvester.run())
        .await
        .context("collection task panicked")?;
    // The harvester owned the only sender, so the printer drains and exits.
    let _ = printer.await;

    let report = match result {
        Ok(report) => report,
        Err(HarvestError::Aborted) => {
            println!("Aborted before discovery finished; nothing was downloaded.");
            return Ok(RunStatus::Aborted);
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "Done: {} saved, {} failed, {} skipped ({} discovered on {} page(s)).",
        report.saved(),
        report.failed(),
        report.not_started(),
        report.discovered(),
        report.pages
    );

    if report.aborted {
        Ok(RunStatus::Aborted)
    } else if args.strict && report.failed() > 0 {
        Ok(RunStatus::Partial)
    } else {
        Ok(RunStatus::Success)
    }
}

fn print_banner(spec: &CollectionSpec, name: Option<&str>) {
    let pages = spec.pages();
    println!(
        "Downloading SVGs from collection: {}",
        name.unwrap_or("Unknown Collection")
    );
    println!("Collection slug: {}", spec.slug());
    println!(
        "Processing pages {} to {} ({} total)",
        pages.start(),
        pages.end(),
        pages.len()
    );
    println!("Output directory: {}", spec.output_dir().display());
}

async fn print_events(mut rx: EventReceiver) {
    while let Some(event) = rx.recv().await {
        match event {
            HarvestEvent::PageDiscovered { page, items, .. } => {
                println!("Page {}: {} icon(s)", page, items);
            }
            HarvestEvent::AssetSaved { filename, .. } => println!("Saved {}", filename),
            HarvestEvent::AssetFailed { url, reason, .. } => {
                eprintln!("Failed to save {}: {}", url, reason);
            }
            HarvestEvent::Aborted { remaining } => {
                eprintln!("Skipped {} download(s) after interrupt.", remaining);
            }
        }
    }
}
