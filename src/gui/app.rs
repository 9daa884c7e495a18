//! Main GUI application using egui
//!
//! Layout:
//! - Tab bar and progress header (top)
//! - Level cards for the active tab (center)
//! - Status bar with load state and refresh control (bottom)

use crate::LevelKey;
use crate::refresh::RefreshScheduler;
use crate::tracker::Tracker;

use super::tabs::Tab;

/// Main application state
pub struct TrackerApp {
    /// Levels and checked state
    pub(super) tracker: Tracker,
    /// Background refresh schedule; dropped (and cancelled) with the app
    pub(super) scheduler: RefreshScheduler,
    /// Currently shown tab
    pub(super) active_tab: Tab,
    /// Where levels are loaded from, for the status bar
    pub(super) source_label: String,
    /// Hide checked levels from the list
    pub(super) hide_completed: bool,
    /// Last failure to save checked state
    pub(super) save_error: Option<String>,
}

impl TrackerApp {
    /// Create a new GUI application
    pub fn new(tracker: Tracker, scheduler: RefreshScheduler, source_label: String) -> Self {
        Self {
            tracker,
            scheduler,
            active_tab: Tab::default(),
            source_label,
            hide_completed: false,
            save_error: None,
        }
    }

    /// Apply all refresh results that arrived since the last frame
    pub(super) fn poll_refresh(&mut self) {
        for event in self.scheduler.poll() {
            self.tracker.apply(event);
        }
    }

    /// Apply checkbox changes collected while rendering
    pub(super) fn apply_toggles(&mut self, changes: Vec<(LevelKey, bool)>) {
        for (key, completed) in changes {
            match self.tracker.set_completed(&key, completed) {
                Ok(()) => self.save_error = None,
                Err(e) => self.save_error = Some(format!("Failed to save checked levels: {}", e)),
            }
        }
    }
}
