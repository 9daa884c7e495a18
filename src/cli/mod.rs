//! CLI command implementations

pub mod check;
pub mod init;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result, bail};

use nikki_tracker::Tracker;
use nikki_tracker::config::Config;
use nikki_tracker::ingest::source_from_settings;
use nikki_tracker::store::store_for;

/// Load config, restore saved state and run one ingestion pass
pub(crate) async fn load_tracker(config_path: &Path) -> Result<(Config, Tracker)> {
    let config = Config::load_or_default(config_path)?;
    let source = source_from_settings(&config.source)?;
    let store = store_for(config.storage.persist, config.storage_path());
    let mut tracker = Tracker::new(store);

    let describe = source.describe();
    let result = tokio::task::spawn_blocking(move || source.fetch())
        .await
        .context("Level fetch task panicked")?;

    match result {
        Ok(ingested) => tracker.apply_ingested(ingested),
        Err(e) => bail!("{} ({}): {}", e.user_message(), describe, e.detail()),
    }

    Ok((config, tracker))
}
