use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Level, LevelKey};

/// Checked state per level. Absent keys are not completed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionState(BTreeMap<LevelKey, bool>);

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: LevelKey, completed: bool) {
        self.0.insert(key, completed);
    }

    /// Flip a flag and return the new value
    pub fn toggle(&mut self, key: &LevelKey) -> bool {
        let value = !self.is_completed(key);
        self.0.insert(key.clone(), value);
        value
    }

    pub fn is_completed(&self, key: &LevelKey) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Number of levels in `levels` that are checked
    pub fn completed_among(&self, levels: &[Level]) -> usize {
        levels.iter().filter(|l| self.is_completed(&l.key)).count()
    }

    /// Copy entries from `seed` for keys this state has no entry for
    pub fn seed_missing(&mut self, seed: &CompletionState) {
        for (key, &completed) in &seed.0 {
            self.0.entry(key.clone()).or_insert(completed);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LevelKey, bool)> {
        self.0.iter().map(|(k, &v)| (k, v))
    }
}

impl FromIterator<(LevelKey, bool)> for CompletionState {
    fn from_iter<I: IntoIterator<Item = (LevelKey, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
