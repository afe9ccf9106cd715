//! `iconpull list <slug>` – discover assets without downloading.

use anyhow::{Context, Result};
use iconpull_core::config::IconpullConfig;
use iconpull_core::{CurlFetcher, Harvester};

use crate::cli::{CollectionArgs, RunStatus};

pub async fn run_list(cfg: &IconpullConfig, args: CollectionArgs) -> Result<RunStatus> {
    let spec = args.to_spec(cfg)?;
    let harvester = Harvester::new(spec, CurlFetcher::new(cfg.http()));
    let items = tokio::task::spawn_blocking(move || harvester.discover())
        .await
        .context("discovery task panicked")??;

    for item in &items {
        println!("{}  {}", item.source_url, item.filename);
    }
    tracing::info!("listed {} asset(s)", items.len());
    Ok(RunStatus::Success)
}
