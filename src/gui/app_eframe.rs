//! eframe::App implementation for TrackerApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use eframe::egui::{self, RichText};

use super::app::TrackerApp;
use super::level_list::{render_level_list, render_progress};
use super::status_bar::{StatusBarState, render_status_bar};
use super::tabs::{render_placeholder, render_tab_bar};
use super::theme::{BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY};

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply refresh results from the background worker
        self.poll_refresh();

        self.apply_theme(ctx);

        // Bottom status bar - MUST be rendered before the central panel
        // so that it can account for the status bar's height
        let mut refresh_requested = false;
        render_status_bar(
            ctx,
            &mut StatusBarState {
                tracker: &self.tracker,
                source_label: &self.source_label,
                save_error: self.save_error.as_deref(),
                hide_completed: &mut self.hide_completed,
                refresh_requested: &mut refresh_requested,
            },
        );
        if refresh_requested {
            self.scheduler.refresh_now();
        }

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Infinity Nikki Level Tracker")
                            .heading()
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
                ui.add_space(8.0);
                render_tab_bar(ui, &mut self.active_tab);
                if self.active_tab.has_content() {
                    ui.add_space(8.0);
                    render_progress(ui, self.tracker.progress());
                }
            });

        let changes = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(12.0))
            .show(ctx, |ui| {
                if self.active_tab.has_content() {
                    render_level_list(ui, &self.tracker, self.hide_completed)
                } else {
                    render_placeholder(ui, self.active_tab);
                    Vec::new()
                }
            })
            .inner;

        self.apply_toggles(changes);

        // The refresh worker wakes us on new data; this keeps the clock current
        ctx.request_repaint_after(Duration::from_secs(30));
    }
}
