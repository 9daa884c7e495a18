use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RewardKind;

/// Identity that completion state is attached to.
///
/// Derived from the level name when names are unique within an ingestion
/// pass, otherwise from the 1-based row position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelKey(String);

impl LevelKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for a level identified only by its row position
    pub fn positional(id: usize) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LevelKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single reward amount as read from the sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewardValue {
    Number(f64),
    Text(String),
}

impl RewardValue {
    /// Coerce a raw cell into a value; numeric-looking cells become numbers
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => RewardValue::Number(n),
            _ => RewardValue::Text(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for RewardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewardValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            RewardValue::Number(n) => write!(f, "{}", n),
            RewardValue::Text(s) => f.write_str(s),
        }
    }
}

/// Rewards granted at a level, keyed by kind. Kinds not granted are `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rewards(BTreeMap<RewardKind, RewardValue>);

impl Rewards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: RewardKind, value: RewardValue) -> Self {
        self.0.insert(kind, value);
        self
    }

    pub fn set(&mut self, kind: RewardKind, value: Option<RewardValue>) {
        match value {
            Some(v) => {
                self.0.insert(kind, v);
            }
            None => {
                self.0.remove(&kind);
            }
        }
    }

    pub fn get(&self, kind: RewardKind) -> Option<&RewardValue> {
        self.0.get(&kind)
    }

    /// Granted rewards in catalog order
    pub fn granted(&self) -> impl Iterator<Item = (RewardKind, &RewardValue)> {
        RewardKind::ALL
            .into_iter()
            .filter_map(|kind| self.0.get(&kind).map(|value| (kind, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Placeholder shown where a level has no title or a reward is not granted
pub const ABSENT_DISPLAY: &str = "-";

/// One milestone row of the tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based position in the ingested sequence
    pub id: usize,
    pub key: LevelKey,
    /// Display name, e.g. "Mira Level 10"
    pub level: String,
    pub title: Option<String>,
    pub rewards: Rewards,
    /// Mira points required to reach this level
    pub required: Option<u32>,
}

impl Level {
    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or(ABSENT_DISPLAY)
    }

    /// Display text for one reward kind, dash when not granted
    pub fn reward_display(&self, kind: RewardKind) -> String {
        self.rewards
            .get(kind)
            .map(|v| v.to_string())
            .unwrap_or_else(|| ABSENT_DISPLAY.to_string())
    }
}

/// Treat empty and dash cells as absent
pub(crate) fn non_sentinel(cell: &str) -> Option<&str> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || trimmed == ABSENT_DISPLAY {
        None
    } else {
        Some(trimmed)
    }
}

/// Assign keys for one ingestion pass: names when unique, positions otherwise
pub(crate) fn assign_keys(levels: &mut [Level]) {
    let mut seen = std::collections::HashSet::new();
    let unique = levels.iter().all(|l| seen.insert(l.level.as_str()));

    for level in levels.iter_mut() {
        level.key = if unique {
            LevelKey::new(level.level.clone())
        } else {
            LevelKey::positional(level.id)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: usize, name: &str) -> Level {
        Level {
            id,
            key: LevelKey::positional(id),
            level: name.to_string(),
            title: None,
            rewards: Rewards::new(),
            required: None,
        }
    }

    #[test]
    fn test_reward_value_coercion() {
        assert_eq!(RewardValue::from_cell("30"), RewardValue::Number(30.0));
        assert_eq!(RewardValue::from_cell(" 1.5 "), RewardValue::Number(1.5));
        assert_eq!(
            RewardValue::from_cell("Outfit piece"),
            RewardValue::Text("Outfit piece".to_string())
        );
        // "NaN" and "inf" parse as floats but are not numbers on a sheet
        assert_eq!(
            RewardValue::from_cell("inf"),
            RewardValue::Text("inf".to_string())
        );
    }

    #[test]
    fn test_reward_value_display() {
        assert_eq!(RewardValue::Number(30.0).to_string(), "30");
        assert_eq!(RewardValue::Number(2.5).to_string(), "2.5");
        assert_eq!(RewardValue::Text("x2".into()).to_string(), "x2");
    }

    #[test]
    fn test_granted_follows_catalog_order() {
        let rewards = Rewards::new()
            .with(RewardKind::Eureka, RewardValue::Number(1.0))
            .with(RewardKind::Diamond, RewardValue::Number(30.0));
        let kinds: Vec<_> = rewards.granted().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RewardKind::Diamond, RewardKind::Eureka]);
    }

    #[test]
    fn test_display_placeholders() {
        let l = level(1, "Mira Level 1");
        assert_eq!(l.title_display(), "-");
        assert_eq!(l.reward_display(RewardKind::Bling), "-");
    }

    #[test]
    fn test_non_sentinel() {
        assert_eq!(non_sentinel(" - "), None);
        assert_eq!(non_sentinel(""), None);
        assert_eq!(non_sentinel(" Dreaming Traveler "), Some("Dreaming Traveler"));
    }

    #[test]
    fn test_assign_keys_uses_names_when_unique() {
        let mut levels = vec![level(1, "Mira Level 1"), level(2, "Mira Level 2")];
        assign_keys(&mut levels);
        assert_eq!(levels[0].key, LevelKey::new("Mira Level 1"));
        assert_eq!(levels[1].key, LevelKey::new("Mira Level 2"));
    }

    #[test]
    fn test_assign_keys_falls_back_to_positions() {
        let mut levels = vec![
            level(1, "Mira Level 1"),
            level(2, "Mira Level 1"),
            level(3, "Mira Level 3"),
        ];
        assign_keys(&mut levels);
        let keys: Vec<_> = levels.iter().map(|l| l.key.as_str().to_string()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }
}
