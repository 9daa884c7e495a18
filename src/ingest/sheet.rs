//! Spreadsheet export parser
//!
//! Turns the CSV export of the Mira Level sheet into [`Level`] records:
//! ```text
//! Mira Level,Title,Resonite Crystal,Diamond,Energy Crystal,...
//! Mira Level 1,-,,,1,...
//! ```
//! The header row names the fields. Reward columns that are missing, empty
//! or hold a dash are treated as "not granted".

use crate::domain::{Level, LevelKey, RewardKind, RewardValue, Rewards, assign_keys, non_sentinel};

/// Column holding the level display name
pub const LEVEL_COLUMN: &str = "Mira Level";
/// Column holding the optional level title
pub const TITLE_COLUMN: &str = "Title";
/// Optional column holding the required Mira points
pub const REQUIRED_COLUMN: &str = "Required";

/// Error type for sheet parsing
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Sheet has no header row")]
    MissingHeader,

    #[error("Sheet header is missing the '{0}' column")]
    MissingColumn(&'static str),

    #[error("Row on line {line} has {found} fields, header has {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Row on line {line} has an empty 'Mira Level' cell")]
    MissingLevelName { line: u64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Resolved header positions
struct Columns {
    level: usize,
    title: Option<usize>,
    required: Option<usize>,
    rewards: Vec<(RewardKind, usize)>,
    width: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(IngestError::MissingHeader);
        }

        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let level = find(LEVEL_COLUMN).ok_or(IngestError::MissingColumn(LEVEL_COLUMN))?;
        let rewards = RewardKind::ALL
            .into_iter()
            .filter_map(|kind| find(kind.column()).map(|idx| (kind, idx)))
            .collect();

        Ok(Self {
            level,
            title: find(TITLE_COLUMN),
            required: find(REQUIRED_COLUMN),
            rewards,
            width: headers.len(),
        })
    }
}

/// Parse a sheet export into levels, numbered 1..N in row order.
///
/// Any malformed row fails the whole parse; no partial list is returned.
/// Input that is not valid UTF-8 is a parse error as well.
pub fn parse_levels(input: impl AsRef<[u8]>) -> Result<Vec<Level>, IngestError> {
    // Field counts are checked per row below so that blank lines can be skipped
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_ref());

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut levels = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        if record.len() != columns.width {
            return Err(IngestError::MalformedRow {
                line,
                expected: columns.width,
                found: record.len(),
            });
        }

        levels.push(parse_row(&record, &columns, levels.len() + 1, line)?);
    }

    assign_keys(&mut levels);
    Ok(levels)
}

fn parse_row(
    record: &csv::StringRecord,
    columns: &Columns,
    id: usize,
    line: u64,
) -> Result<Level, IngestError> {
    let cell = |idx: usize| record.get(idx).unwrap_or("");

    let name = cell(columns.level).trim();
    if name.is_empty() {
        return Err(IngestError::MissingLevelName { line });
    }

    let title = columns
        .title
        .and_then(|idx| non_sentinel(cell(idx)))
        .map(String::from);

    let required = columns
        .required
        .and_then(|idx| non_sentinel(cell(idx)))
        .and_then(parse_required);

    let mut rewards = Rewards::new();
    for &(kind, idx) in &columns.rewards {
        rewards.set(kind, non_sentinel(cell(idx)).map(RewardValue::from_cell));
    }

    Ok(Level {
        id,
        key: LevelKey::positional(id),
        level: name.to_string(),
        title,
        rewards,
        required,
    })
}

fn parse_required(cell: &str) -> Option<u32> {
    match RewardValue::from_cell(cell) {
        RewardValue::Number(n) if n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64 => {
            Some(n as u32)
        }
        _ => None,
    }
}
