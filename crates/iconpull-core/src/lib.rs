pub mod config;
pub mod logging;

pub mod collection;
pub mod error;
pub mod events;
pub mod extract;
pub mod fetch;
pub mod names;
pub mod pagination;
pub mod pipeline;
pub mod storage;

pub use collection::{CollectionSpec, PageRange};
pub use error::{ConfigError, DownloadError, FetchError, HarvestError, WriteError};
pub use events::HarvestEvent;
pub use extract::{extract_assets, AssetItem};
pub use fetch::{CurlFetcher, Fetcher};
pub use names::normalize_name;
pub use pagination::{plan_pages, ListingPage};
pub use pipeline::{Harvester, HarvestOptions, ItemStatus, Phase, RunReport};
pub use storage::DirectorySink;
