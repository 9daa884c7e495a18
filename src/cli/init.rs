//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Default configuration content for `nikki-tracker init`
pub const DEFAULT_CONFIG: &str = r#"# Nikki Tracker Configuration
# ===========================

# ============================================================================
# SOURCE - Where the Mira Level table comes from
# ============================================================================
#
#   kind = "static"  Built-in table (Mira Levels 1-10)
#   kind = "http"    Spreadsheet CSV export, fetched from `url`
#   kind = "file"    CSV file on disk at `file`
#
# The sheet needs a "Mira Level" column. "Title", "Required" and the reward
# columns (Resonite Crystal, Diamond, Energy Crystal, Shiny Bubbles,
# Thread of Purity, Bling, Crafting Material, Eureka) are optional; empty or
# "-" cells mean the reward is not granted at that level.

[source]
kind = "static"
url = ""
file = "mira_levels.csv"
http_timeout_secs = 30

# ============================================================================
# REFRESH - How often the sheet is reloaded while the window is open
# ============================================================================

[refresh]
interval_secs = 300

# ============================================================================
# STORAGE - Checked levels
# ============================================================================
#
#   persist - Save checked levels on every change (default: true)
#   path    - Local storage file (default: platform data directory)

[storage]
persist = true

[gui]
window_width = 820.0
window_height = 720.0
"#;

/// Write the default configuration file
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
