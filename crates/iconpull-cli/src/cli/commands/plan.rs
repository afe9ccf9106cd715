//! `iconpull plan <slug>` – print listing page URLs.

use anyhow::Result;
use iconpull_core::config::IconpullConfig;
use iconpull_core::pagination::plan_for;

use crate::cli::{CollectionArgs, RunStatus};

pub fn run_plan(cfg: &IconpullConfig, args: &CollectionArgs) -> Result<RunStatus> {
    let spec = args.to_spec(cfg)?;
    for listing in plan_for(&spec) {
        println!("{}", listing.url);
    }
    Ok(RunStatus::Success)
}
