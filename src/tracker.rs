//! UI-independent tracker state: levels, checked state and load status

use chrono::{DateTime, Local};
use tracing::warn;

use crate::domain::{Level, LevelKey, Progress};
use crate::ingest::{Ingested, LoadError};
use crate::refresh::RefreshEvent;
use crate::store::{CompletionState, CompletionStore, StorageError};

/// Minimum similarity for a "did you mean" suggestion
const SUGGESTION_THRESHOLD: f64 = 0.5;

/// State of the most recent refresh cycle
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Nothing requested yet
    Idle,
    /// An ingestion pass is running
    Loading,
    /// The last pass succeeded
    Ready,
    /// The last pass failed; the previous level list is still shown
    Failed(LoadError),
}

/// The level list together with its completion state
pub struct Tracker {
    levels: Vec<Level>,
    completion: CompletionState,
    store: Box<dyn CompletionStore>,
    status: LoadStatus,
    last_updated: Option<DateTime<Local>>,
}

impl Tracker {
    /// Create a tracker, loading saved completion state from `store`
    pub fn new(store: Box<dyn CompletionStore>) -> Self {
        let completion = store.load();
        Self {
            levels: Vec::new(),
            completion,
            store,
            status: LoadStatus::Idle,
            last_updated: None,
        }
    }

    /// Apply one event from the refresh scheduler
    pub fn apply(&mut self, event: RefreshEvent) {
        match event {
            RefreshEvent::Started => self.status = LoadStatus::Loading,
            RefreshEvent::Loaded(ingested) => self.apply_ingested(ingested),
            RefreshEvent::Failed(error) => self.apply_failure(error),
        }
    }

    /// Replace the level list with a fresh ingestion result
    pub fn apply_ingested(&mut self, ingested: Ingested) {
        // Saved state wins over flags shipped with the data
        if let Some(seed) = &ingested.seed {
            self.completion.seed_missing(seed);
        }

        self.levels = ingested.levels;
        self.status = LoadStatus::Ready;
        self.last_updated = Some(Local::now());
    }

    /// Record a failed pass; the current level list is kept as is
    pub fn apply_failure(&mut self, error: LoadError) {
        self.status = LoadStatus::Failed(error);
    }

    /// Set one level's checked state and persist the whole mapping
    pub fn set_completed(&mut self, key: &LevelKey, completed: bool) -> Result<(), StorageError> {
        self.completion.set(key.clone(), completed);
        self.persist()
    }

    /// Flip one level's checked state, returning the new value
    pub fn toggle(&mut self, key: &LevelKey) -> Result<bool, StorageError> {
        let value = self.completion.toggle(key);
        self.persist().map(|()| value)
    }

    /// Uncheck every level.
    ///
    /// Current levels get an explicit `false` so that flags shipped with the
    /// data do not fill them back in on the next pass.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.completion.clear();
        for level in &self.levels {
            self.completion.set(level.key.clone(), false);
        }
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        self.store.save(&self.completion).inspect_err(|e| {
            warn!("[nikki] Failed to save checked levels: {}", e);
        })
    }

    pub fn is_completed(&self, key: &LevelKey) -> bool {
        self.completion.is_completed(key)
    }

    /// Completion over the current level list, computed fresh on every call
    pub fn progress(&self) -> Progress {
        Progress::new(self.completion.completed_among(&self.levels), self.levels.len())
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Find a level by key, name (case-insensitive) or 1-based id
    pub fn find_level(&self, query: &str) -> Option<&Level> {
        let query = query.trim();
        self.levels
            .iter()
            .find(|l| l.key.as_str() == query)
            .or_else(|| {
                self.levels
                    .iter()
                    .find(|l| l.level.eq_ignore_ascii_case(query))
            })
            .or_else(|| {
                let id: usize = query.parse().ok()?;
                self.levels.iter().find(|l| l.id == id)
            })
    }

    /// Closest level name to `query`, for "did you mean" hints
    pub fn suggest_level(&self, query: &str) -> Option<&str> {
        let query = query.trim().to_lowercase();
        self.levels
            .iter()
            .map(|l| {
                let score = strsim::normalized_levenshtein(&query, &l.level.to_lowercase());
                (l.level.as_str(), score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("levels", &self.levels.len())
            .field("completion", &self.completion)
            .field("status", &self.status)
            .finish()
    }
}
