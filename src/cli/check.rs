//! Check / uncheck / reset command implementations

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Set the checked state of one level
pub async fn check_command(config_path: &Path, query: &str, completed: bool) -> Result<()> {
    let (config, mut tracker) = super::load_tracker(config_path).await?;

    if !config.storage.persist {
        bail!("Checked state is not persisted (storage.persist = false); use the GUI instead");
    }

    let Some(level) = tracker.find_level(query) else {
        match tracker.suggest_level(query) {
            Some(name) => bail!("Unknown level: {}\nDid you mean '{}'?", query, name),
            None => bail!("Unknown level: {}", query),
        }
    };

    let key = level.key.clone();
    let line = super::list::format_level(level, completed);
    tracker
        .set_completed(&key, completed)
        .with_context(|| format!("Failed to save {}", config.storage_path().display()))?;

    println!("{}", line);
    println!("{}", tracker.progress());
    Ok(())
}

/// Uncheck every level and save the result
pub async fn reset_command(config_path: &Path) -> Result<()> {
    let (config, mut tracker) = super::load_tracker(config_path).await?;

    if !config.storage.persist {
        bail!("Checked state is not persisted (storage.persist = false); nothing to reset");
    }

    let path = config.storage_path();
    tracker
        .reset()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    println!("Cleared checked levels in {}", path.display());
    println!("{}", tracker.progress());
    Ok(())
}
