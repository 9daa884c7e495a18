use serde::{Deserialize, Serialize};

/// A reward granted when a Mira Level is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    ResoniteCrystal,
    Diamond,
    EnergyCrystal,
    ShinyBubbles,
    ThreadOfPurity,
    Bling,
    CraftingMaterial,
    Eureka,
}

impl RewardKind {
    /// All reward kinds, in sheet column order
    pub const ALL: [RewardKind; 8] = [
        RewardKind::ResoniteCrystal,
        RewardKind::Diamond,
        RewardKind::EnergyCrystal,
        RewardKind::ShinyBubbles,
        RewardKind::ThreadOfPurity,
        RewardKind::Bling,
        RewardKind::CraftingMaterial,
        RewardKind::Eureka,
    ];

    /// Column header used in the spreadsheet export
    pub fn column(&self) -> &'static str {
        match self {
            RewardKind::ResoniteCrystal => "Resonite Crystal",
            RewardKind::Diamond => "Diamond",
            RewardKind::EnergyCrystal => "Energy Crystal",
            RewardKind::ShinyBubbles => "Shiny Bubbles",
            RewardKind::ThreadOfPurity => "Thread of Purity",
            RewardKind::Bling => "Bling",
            RewardKind::CraftingMaterial => "Crafting Material",
            RewardKind::Eureka => "Eureka",
        }
    }

    /// Emoji shown next to the reward amount
    pub fn glyph(&self) -> &'static str {
        match self {
            RewardKind::ResoniteCrystal => "🔮",
            RewardKind::Diamond => "💎",
            RewardKind::EnergyCrystal => "⚡",
            RewardKind::ShinyBubbles => "🫧",
            RewardKind::ThreadOfPurity => "🧵",
            RewardKind::Bling => "💰",
            RewardKind::CraftingMaterial => "🔨",
            RewardKind::Eureka => "✨",
        }
    }

    /// Look up a reward kind by its column header (case-insensitive)
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.column().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for RewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}
