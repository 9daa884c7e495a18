//! Level ingestion from the configured data source

pub mod sheet;
mod seed;
mod source;

pub use sheet::{IngestError, parse_levels};
pub use seed::{static_completion, static_levels};
pub use source::{FileSource, HttpSource, LevelSource, StaticSource, source_from_settings};

use crate::domain::Level;
use crate::store::CompletionState;

/// Result of one successful ingestion pass
#[derive(Debug, Clone)]
pub struct Ingested {
    pub levels: Vec<Level>,
    /// Completion flags shipped with the data (built-in table only)
    pub seed: Option<CompletionState>,
}

impl Ingested {
    pub fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels, seed: None }
    }
}

/// Why an ingestion pass produced no data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The sheet could not be fetched or read
    #[error("error loading sheet data: {0}")]
    Fetch(String),

    /// The sheet was fetched but is not a valid level table
    #[error("error parsing sheet data: {0}")]
    Parse(String),
}

impl LoadError {
    /// Generic message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Fetch(_) => "error loading sheet data",
            LoadError::Parse(_) => "error parsing sheet data",
        }
    }

    /// Underlying cause
    pub fn detail(&self) -> &str {
        match self {
            LoadError::Fetch(detail) | LoadError::Parse(detail) => detail,
        }
    }
}

impl From<IngestError> for LoadError {
    fn from(e: IngestError) -> Self {
        LoadError::Parse(e.to_string())
    }
}
