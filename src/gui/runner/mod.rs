//! GUI runner - launches the tracker window

mod fonts;

use std::path::Path;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use super::app::TrackerApp;
use crate::config::Config;
use crate::ingest::source_from_settings;
use crate::refresh::RefreshScheduler;
use crate::store::store_for;
use crate::tracker::Tracker;

use fonts::configure_fonts;

/// Load the config for the GUI, falling back to defaults on parse errors
fn load_config(config_path: &Path) -> Config {
    match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "[nikki] Failed to parse config ({}): {:#}. Falling back to defaults.",
                config_path.display(),
                e
            );
            Config::default()
        }
    }
}

/// Run the tracker window until it is closed
pub fn run_gui(config_path: &Path) -> Result<()> {
    let config = load_config(config_path);

    let source = source_from_settings(&config.source)?;
    let source_label = format!("{} ({})", source.describe(), config.source.kind);

    let storage_path = config.storage_path();
    if config.storage.persist {
        info!("[nikki] Saving checked levels to {}", storage_path.display());
    }
    let tracker = Tracker::new(store_for(config.storage.persist, storage_path));

    let interval = config.refresh.interval();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Infinity Nikki Level Tracker"),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "nikki-tracker",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);

            // The schedule starts with the window and ends when the app is dropped
            let ctx = cc.egui_ctx.clone();
            let scheduler = RefreshScheduler::start_with_notify(
                source,
                interval,
                Some(Box::new(move || ctx.request_repaint())),
            );

            Ok(Box::new(TrackerApp::new(tracker, scheduler, source_label)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    info!("[nikki] Window closed");
    Ok(())
}
