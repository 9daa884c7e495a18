//! Fallback fonts for reward glyphs
//!
//! egui's bundled fonts cover neither the reward emoji (🔮 💎 ⚡ 🫧 🧵 💰 🔨 ✨)
//! nor the status bar symbols (⟳ ●). Each group below lists candidate files;
//! the first one present on disk is appended to the proportional family.
//! Color bitmap fonts (Apple Color Emoji, Noto Color Emoji) are not usable by
//! egui, so only outline fonts are listed.

use egui::{FontData, FontDefinitions, FontFamily};
use tracing::{debug, warn};

struct FallbackGroup {
    name: &'static str,
    /// Glyphs the group is expected to provide, for the log line
    covers: &'static str,
    candidates: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const GROUPS: &[FallbackGroup] = &[
    FallbackGroup {
        name: "reward_emoji",
        covers: "🔮💎⚡🫧🧵💰🔨✨",
        candidates: &[
            "/Library/Fonts/NotoEmoji-Regular.ttf",
            "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        ],
    },
    FallbackGroup {
        name: "status_symbols",
        covers: "⟳●",
        candidates: &["/System/Library/Fonts/Apple Symbols.ttf"],
    },
];

#[cfg(target_os = "windows")]
const GROUPS: &[FallbackGroup] = &[
    FallbackGroup {
        name: "reward_emoji",
        covers: "🔮💎⚡🫧🧵💰🔨✨",
        // Segoe UI Emoji carries monochrome outlines next to its color layers
        candidates: &["C:\\Windows\\Fonts\\seguiemj.ttf"],
    },
    FallbackGroup {
        name: "status_symbols",
        covers: "⟳●",
        candidates: &["C:\\Windows\\Fonts\\seguisym.ttf"],
    },
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const GROUPS: &[FallbackGroup] = &[
    FallbackGroup {
        name: "reward_emoji",
        covers: "🔮💎⚡🫧🧵💰🔨✨",
        // Debian/Ubuntu, Fedora, Arch
        candidates: &[
            "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
            "/usr/share/fonts/google-noto-emoji/NotoEmoji-Regular.ttf",
            "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
        ],
    },
    FallbackGroup {
        name: "status_symbols",
        covers: "⟳●",
        candidates: &[
            "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ],
    },
];

/// Install the first available font of every fallback group
pub(super) fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    for group in GROUPS {
        let Some((path, data)) = group
            .candidates
            .iter()
            .find_map(|path| std::fs::read(path).ok().map(|data| (*path, data)))
        else {
            if group.name == "reward_emoji" {
                warn!("[nikki] No emoji font found; reward icons will render as boxes");
            } else {
                debug!("[nikki] No font found for {} ({})", group.name, group.covers);
            }
            continue;
        };

        fonts
            .font_data
            .insert(group.name.to_owned(), FontData::from_owned(data).into());
        if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
            family.push(group.name.to_owned());
        }
        debug!("[nikki] {} ({}) from {}", group.name, group.covers, path);
    }

    ctx.set_fonts(fonts);
}
