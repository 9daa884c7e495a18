//! GUI Theme: "Starlit Wardrobe" - soft lavender on deep plum
//!
//! Color constants for the tracker window.

use egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background: deep plum
pub const BG_PRIMARY: Color32 = Color32::from_rgb(24, 18, 32);
/// Header and status bar panels
pub const BG_SECONDARY: Color32 = Color32::from_rgb(34, 26, 46);
/// Level card background
pub const BG_CARD: Color32 = Color32::from_rgb(42, 32, 58);
/// Level card background once checked
pub const BG_CARD_DONE: Color32 = Color32::from_rgb(56, 40, 80);
/// Progress bar track
pub const BG_TRACK: Color32 = Color32::from_rgb(70, 52, 98);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Primary text: pale lavender
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 226, 255);
/// Titles and secondary labels
pub const TEXT_DIM: Color32 = Color32::from_rgb(190, 160, 230);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 110, 160);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_PURPLE: Color32 = Color32::from_rgb(168, 110, 255);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(110, 170, 255);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(110, 220, 150);
pub const ACCENT_RED: Color32 = Color32::from_rgb(255, 100, 120);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(255, 210, 90);

/// Card outline
pub const CARD_STROKE: Color32 = Color32::from_rgb(86, 64, 120);
/// Card outline on hover
pub const CARD_STROKE_HOVER: Color32 = Color32::from_rgb(150, 110, 210);
