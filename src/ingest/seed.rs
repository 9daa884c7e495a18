//! Built-in Mira Level dataset used when no sheet is configured

use crate::domain::{Level, LevelKey, RewardKind, RewardValue, Rewards, assign_keys};
use crate::store::CompletionState;

/// (name, title, resonite crystals, diamonds, energy crystals, required, completed)
type SeedRow = (
    &'static str,
    Option<&'static str>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    u32,
    bool,
);

const SEED_ROWS: &[SeedRow] = &[
    ("Mira Level 1", None, None, None, None, 20, true),
    ("Mira Level 2", None, None, None, Some(1.0), 20, true),
    ("Mira Level 3", None, None, None, None, 20, true),
    ("Mira Level 4", None, None, None, None, 20, true),
    ("Mira Level 5", None, None, Some(30.0), None, 40, true),
    ("Mira Level 6", None, None, None, None, 20, true),
    ("Mira Level 7", None, Some(1.0), None, None, 20, true),
    ("Mira Level 8", None, None, None, Some(1.0), 20, true),
    ("Mira Level 9", None, None, None, None, 20, true),
    (
        "Mira Level 10",
        Some("Dreaming Traveler"),
        None,
        Some(30.0),
        None,
        40,
        true,
    ),
];

/// The built-in levels, numbered in table order
pub fn static_levels() -> Vec<Level> {
    let mut levels: Vec<Level> = SEED_ROWS
        .iter()
        .enumerate()
        .map(|(idx, &(name, title, crystals, diamonds, energy, required, _))| {
            let mut rewards = Rewards::new();
            rewards.set(RewardKind::ResoniteCrystal, crystals.map(RewardValue::Number));
            rewards.set(RewardKind::Diamond, diamonds.map(RewardValue::Number));
            rewards.set(RewardKind::EnergyCrystal, energy.map(RewardValue::Number));

            Level {
                id: idx + 1,
                key: LevelKey::positional(idx + 1),
                level: name.to_string(),
                title: title.map(String::from),
                rewards,
                required: Some(required),
            }
        })
        .collect();

    assign_keys(&mut levels);
    levels
}

/// Completion flags shipped with the built-in levels
pub fn static_completion(levels: &[Level]) -> CompletionState {
    let mut state = CompletionState::new();
    for (level, row) in levels.iter().zip(SEED_ROWS) {
        state.set(level.key.clone(), row.6);
    }
    state
}
