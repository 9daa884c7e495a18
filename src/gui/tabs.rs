//! Tab bar across the top of the window

use egui::RichText;

use super::theme::{ACCENT_PURPLE, BG_CARD, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Tracker sections. Only Mira Level Rewards has content so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    MiraLevelRewards,
    Wardrobe,
    Outfits,
    Whimstars,
    Exploration,
    Achievements,
    Events,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::MiraLevelRewards,
        Tab::Wardrobe,
        Tab::Outfits,
        Tab::Whimstars,
        Tab::Exploration,
        Tab::Achievements,
        Tab::Events,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::MiraLevelRewards => "Mira Level Rewards",
            Tab::Wardrobe => "Wardrobe",
            Tab::Outfits => "Outfits",
            Tab::Whimstars => "Whimstars",
            Tab::Exploration => "Exploration",
            Tab::Achievements => "Achievements",
            Tab::Events => "Events",
        }
    }

    /// Whether the tab is backed by live data
    pub fn has_content(&self) -> bool {
        matches!(self, Tab::MiraLevelRewards)
    }
}

/// Render the tab bar; clicking a label switches `active`
pub fn render_tab_bar(ui: &mut egui::Ui, active: &mut Tab) {
    ui.horizontal_wrapped(|ui| {
        for tab in Tab::ALL {
            let selected = *active == tab;
            let color = if selected {
                TEXT_PRIMARY
            } else if tab.has_content() {
                TEXT_DIM
            } else {
                TEXT_MUTED
            };

            let text = RichText::new(tab.label()).color(color);
            let text = if selected { text.strong() } else { text };

            let button = egui::Button::new(text)
                .fill(if selected { ACCENT_PURPLE } else { BG_CARD })
                .corner_radius(6.0);
            if ui.add(button).clicked() {
                *active = tab;
            }
        }
    });
}

/// Placeholder body for tabs without content
pub fn render_placeholder(ui: &mut egui::Ui, tab: Tab) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new(tab.label()).heading().color(TEXT_DIM));
        ui.add_space(8.0);
        ui.label(RichText::new("Content coming soon...").color(TEXT_MUTED));
    });
}
