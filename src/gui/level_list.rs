//! Progress header and the scrollable list of level cards

use egui::RichText;

use crate::domain::{Level, LevelKey, Progress, RewardKind};
use crate::tracker::{LoadStatus, Tracker};

use super::theme::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_PURPLE, ACCENT_YELLOW, BG_CARD, BG_CARD_DONE, CARD_STROKE,
    CARD_STROKE_HOVER, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

/// Render the progress bar and the "X of Y levels completed" line
pub fn render_progress(ui: &mut egui::Ui, progress: Progress) {
    ui.add(
        egui::ProgressBar::new(progress.fraction())
            .desired_height(8.0)
            .fill(ACCENT_PURPLE)
            .corner_radius(4.0),
    );
    ui.add_space(4.0);
    ui.vertical_centered(|ui| {
        let color = if progress.is_complete() {
            ACCENT_GREEN
        } else {
            TEXT_DIM
        };
        ui.label(RichText::new(progress.to_string()).small().color(color));
    });
}

/// Render every level card, returning checkbox changes made this frame
pub fn render_level_list(
    ui: &mut egui::Ui,
    tracker: &Tracker,
    hide_completed: bool,
) -> Vec<(LevelKey, bool)> {
    let mut changes = Vec::new();

    if tracker.levels().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            let text = match tracker.status() {
                LoadStatus::Idle | LoadStatus::Loading => "Loading levels...",
                LoadStatus::Failed(e) => e.user_message(),
                LoadStatus::Ready => "The sheet has no levels yet.",
            };
            ui.label(RichText::new(text).color(TEXT_MUTED));
        });
        return changes;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for level in tracker.levels() {
                let done = tracker.is_completed(&level.key);
                if hide_completed && done {
                    continue;
                }
                if let Some(checked) = render_level_card(ui, level, done) {
                    changes.push((level.key.clone(), checked));
                }
                ui.add_space(6.0);
            }
        });

    changes
}

/// One card: checkbox, name and title on the left, rewards on the right
fn render_level_card(ui: &mut egui::Ui, level: &Level, done: bool) -> Option<bool> {
    let mut checked = done;

    let frame = egui::Frame::NONE
        .fill(if done { BG_CARD_DONE } else { BG_CARD })
        .corner_radius(8.0)
        .inner_margin(12.0);

    let response = frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let changed = ui.checkbox(&mut checked, "").changed();

                ui.vertical(|ui| {
                    ui.label(RichText::new(&level.level).strong().color(TEXT_PRIMARY));
                    if let Some(title) = &level.title {
                        ui.label(RichText::new(title).small().color(TEXT_DIM));
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(required) = level.required {
                        ui.label(
                            RichText::new(format!("Required: {}", required))
                                .small()
                                .color(TEXT_MUTED),
                        );
                        ui.add_space(12.0);
                    }
                    // Right-to-left layout: iterate in reverse to keep catalog order
                    let granted: Vec<_> = level.rewards.granted().collect();
                    for (kind, value) in granted.into_iter().rev() {
                        ui.label(
                            RichText::new(format!("{} {}", kind.glyph(), value))
                                .color(reward_color(kind)),
                        )
                        .on_hover_text(kind.column());
                    }
                });

                changed
            })
            .inner
        });

    let stroke_color = if response.response.hovered() {
        CARD_STROKE_HOVER
    } else {
        CARD_STROKE
    };
    ui.painter().rect_stroke(
        response.response.rect,
        8.0,
        egui::Stroke::new(1.0, stroke_color),
        egui::StrokeKind::Inside,
    );

    response.inner.then_some(checked)
}

fn reward_color(kind: RewardKind) -> egui::Color32 {
    match kind {
        RewardKind::Diamond => ACCENT_BLUE,
        RewardKind::ResoniteCrystal | RewardKind::Eureka => ACCENT_PURPLE,
        RewardKind::EnergyCrystal => ACCENT_GREEN,
        RewardKind::Bling | RewardKind::ShinyBubbles => ACCENT_YELLOW,
        RewardKind::ThreadOfPurity | RewardKind::CraftingMaterial => TEXT_DIM,
    }
}
