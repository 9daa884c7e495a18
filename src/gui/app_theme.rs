//! Theme and UI styling for TrackerApp

use super::app::TrackerApp;
use super::theme::{ACCENT_PURPLE, BG_CARD, BG_PRIMARY, BG_SECONDARY, BG_TRACK, TEXT_PRIMARY};
use egui::Stroke;

impl TrackerApp {
    /// Apply the dark lavender theme to the egui context.
    pub(crate) fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_PRIMARY;
        // Also the progress bar track
        style.visuals.extreme_bg_color = BG_TRACK;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_CARD;
        style.visuals.widgets.hovered.bg_fill = BG_TRACK;
        style.visuals.widgets.active.bg_fill = ACCENT_PURPLE;
        style.visuals.selection.bg_fill = ACCENT_PURPLE;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }
}
