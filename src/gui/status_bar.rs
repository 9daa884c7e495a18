//! Status bar component for the GUI
//!
//! Renders the bottom status bar with the load state, last update time,
//! the hide-completed toggle and the refresh button.

use egui::RichText;

use super::theme::{ACCENT_GREEN, ACCENT_PURPLE, ACCENT_RED, BG_SECONDARY, TEXT_MUTED};
use crate::tracker::{LoadStatus, Tracker};

/// Status bar state that can be modified by the status bar UI
pub struct StatusBarState<'a> {
    pub tracker: &'a Tracker,
    pub source_label: &'a str,
    pub save_error: Option<&'a str>,
    pub hide_completed: &'a mut bool,
    pub refresh_requested: &'a mut bool,
}

/// Render the bottom status bar
pub fn render_status_bar(ctx: &egui::Context, state: &mut StatusBarState<'_>) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(6.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_load_status(ui, state.tracker);

                if let Some(error) = state.save_error {
                    ui.add_space(16.0);
                    ui.label(RichText::new(error).small().color(ACCENT_RED));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                            .small()
                            .color(TEXT_MUTED),
                    );
                    ui.add_space(12.0);

                    let loading = matches!(state.tracker.status(), LoadStatus::Loading);
                    if ui
                        .add_enabled(
                            !loading,
                            egui::Button::new(RichText::new("⟳ Refresh").small().color(ACCENT_PURPLE)),
                        )
                        .on_hover_text(state.source_label)
                        .clicked()
                    {
                        *state.refresh_requested = true;
                    }
                    ui.add_space(8.0);

                    ui.checkbox(
                        state.hide_completed,
                        RichText::new("Hide completed").small().color(TEXT_MUTED),
                    );
                });
            });
        });
}

fn render_load_status(ui: &mut egui::Ui, tracker: &Tracker) {
    match tracker.status() {
        LoadStatus::Idle | LoadStatus::Loading => {
            ui.spinner();
            ui.label(RichText::new("Loading sheet...").small().color(TEXT_MUTED));
        }
        LoadStatus::Ready => {
            let updated = tracker
                .last_updated()
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            ui.label(
                RichText::new(format!("● Updated {}", updated))
                    .small()
                    .color(ACCENT_GREEN),
            );
        }
        LoadStatus::Failed(error) => {
            ui.label(
                RichText::new(format!("● {}", error.user_message()))
                    .small()
                    .color(ACCENT_RED),
            )
            .on_hover_text(error.detail());
        }
    }
}
