//! Level data sources: built-in table, HTTP sheet export, local CSV file

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use super::sheet::parse_levels;
use super::seed::{static_completion, static_levels};
use super::{Ingested, LoadError};
use crate::config::{SourceKind, SourceSettings};

/// Something that can produce the current level list
pub trait LevelSource: Send {
    /// Short human-readable origin, e.g. a URL or file path
    fn describe(&self) -> String;

    /// Run one ingestion pass
    fn fetch(&self) -> Result<Ingested, LoadError>;
}

/// Built-in Mira Level table with its shipped completion flags
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSource;

impl LevelSource for StaticSource {
    fn describe(&self) -> String {
        "built-in levels".to_string()
    }

    fn fetch(&self) -> Result<Ingested, LoadError> {
        let levels = static_levels();
        let seed = static_completion(&levels);
        Ok(Ingested {
            levels,
            seed: Some(seed),
        })
    }
}

/// CSV export fetched with an HTTP GET
#[derive(Clone)]
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl LevelSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Ingested, LoadError> {
        debug!("[nikki] Fetching sheet from {}", self.url);

        let response = match self
            .agent
            .get(&self.url)
            .set("User-Agent", "nikki-tracker")
            .set("Accept", "text/csv")
            .call()
        {
            Ok(r) => r,
            Err(e) => return Err(LoadError::Fetch(format!("Failed to fetch sheet: {}", e))),
        };

        // Raw bytes: encoding problems are reported by the parser, not here
        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| LoadError::Fetch(format!("Failed to read response: {}", e)))?;

        Ok(Ingested::from_levels(parse_levels(&body)?))
    }
}

/// CSV file read from disk on every refresh
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LevelSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Ingested, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            LoadError::Fetch(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(Ingested::from_levels(parse_levels(&bytes)?))
    }
}

/// Build the source named by the `[source]` config section
pub fn source_from_settings(settings: &SourceSettings) -> anyhow::Result<Box<dyn LevelSource>> {
    match settings.kind {
        SourceKind::Static => Ok(Box::new(StaticSource)),
        SourceKind::Http => {
            if settings.url.trim().is_empty() {
                anyhow::bail!("source.kind = \"http\" requires source.url to be set");
            }
            Ok(Box::new(HttpSource::new(
                settings.url.trim(),
                Duration::from_secs(settings.http_timeout_secs),
            )))
        }
        SourceKind::File => Ok(Box::new(FileSource::new(settings.file.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source_seeds_completion() {
        let ingested = StaticSource.fetch().unwrap();
        assert_eq!(ingested.levels.len(), 10);
        assert_eq!(ingested.seed.map(|s| s.len()), Some(10));
    }

    #[test]
    fn test_file_source_reads_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mira_levels.csv");
        std::fs::write(&path, "Mira Level,Diamond\nMira Level 1,30\n").unwrap();

        let ingested = FileSource::new(&path).fetch().unwrap();
        assert_eq!(ingested.levels.len(), 1);
        assert!(ingested.seed.is_none());
    }

    #[test]
    fn test_file_source_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.csv"))
            .fetch()
            .unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
        assert_eq!(err.user_message(), "error loading sheet data");
    }

    #[test]
    fn test_file_source_bad_csv_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "Title,Diamond\n-,30\n").unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.user_message(), "error parsing sheet data");
    }

    #[test]
    fn test_file_source_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"Mira Level\nMira \xff Level\n").unwrap();

        let err = FileSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert_eq!(err.user_message(), "error parsing sheet data");
    }

    #[test]
    fn test_http_source_requires_url() {
        let settings = SourceSettings {
            kind: SourceKind::Http,
            ..SourceSettings::default()
        };
        assert!(source_from_settings(&settings).is_err());
    }

    #[test]
    fn test_http_source_unreachable_is_fetch_error() {
        // Port 9 on loopback refuses connections
        let source = HttpSource::new("http://127.0.0.1:9/sheet.csv", Duration::from_secs(2));
        assert!(matches!(source.fetch(), Err(LoadError::Fetch(_))));
    }
}
