//! Catalog Store — the read-only set of assessment records, loaded once at startup.
//!
//! Source format is a CSV file with a header row. Any structural problem in any row
//! aborts the load: a broken catalog is a configuration error, not something to
//! recover from per request.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use tracing::info;

use crate::models::assessment::{split_skills, AssessmentRecord, Support};

pub const COL_NAME: &str = "Assessment Name";
pub const COL_URL: &str = "URL";
pub const COL_DURATION: &str = "Duration (mins)";
pub const COL_TEST_TYPE: &str = "Test Type";
pub const COL_REMOTE: &str = "Remote Testing Support";
pub const COL_ADAPTIVE: &str = "Adaptive/IRT Support";
pub const COL_SKILLS: &str = "Skills";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Malformed catalog row {row}: column '{column}' {reason}")]
    MalformedRow {
        row: usize,
        column: &'static str,
        reason: String,
    },
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    name: usize,
    url: usize,
    duration: usize,
    test_type: usize,
    remote: usize,
    adaptive: usize,
    skills: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(CatalogError::MissingColumn(column))
        };

        Ok(Self {
            name: find(COL_NAME)?,
            url: find(COL_URL)?,
            duration: find(COL_DURATION)?,
            test_type: find(COL_TEST_TYPE)?,
            remote: find(COL_REMOTE)?,
            adaptive: find(COL_ADAPTIVE)?,
            skills: find(COL_SKILLS)?,
        })
    }
}

/// The in-memory assessment catalog. Owned by `AppState` behind an `Arc` and never
/// mutated after `load`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<AssessmentRecord>,
}

impl Catalog {
    /// Loads the catalog from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_reader(file)?;
        info!(
            "Loaded {} assessments from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses catalog CSV from any reader. Fails on the first malformed row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = ColumnIndex::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row?;
            records.push(parse_row(&row, &columns, idx + 1)?);
        }

        Ok(Self { records })
    }

    #[cfg(test)]
    pub fn from_records(records: Vec<AssessmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_row(
    row: &StringRecord,
    columns: &ColumnIndex,
    row_number: usize,
) -> Result<AssessmentRecord, CatalogError> {
    let field = |index: usize, column: &'static str| {
        row.get(index).ok_or_else(|| CatalogError::MalformedRow {
            row: row_number,
            column,
            reason: "is missing".to_string(),
        })
    };

    let duration_raw = field(columns.duration, COL_DURATION)?;
    let duration_minutes =
        duration_raw
            .parse::<u32>()
            .map_err(|_| CatalogError::MalformedRow {
                row: row_number,
                column: COL_DURATION,
                reason: format!("must be a non-negative integer, got '{duration_raw}'"),
            })?;

    let support = |index: usize, column: &'static str| -> Result<Support, CatalogError> {
        field(index, column)?
            .parse::<Support>()
            .map_err(|reason| CatalogError::MalformedRow {
                row: row_number,
                column,
                reason,
            })
    };

    Ok(AssessmentRecord {
        name: field(columns.name, COL_NAME)?.to_string(),
        url: field(columns.url, COL_URL)?.to_string(),
        duration_minutes,
        test_type: field(columns.test_type, COL_TEST_TYPE)?.to_string(),
        remote_support: support(columns.remote, COL_REMOTE)?,
        adaptive_support: support(columns.adaptive, COL_ADAPTIVE)?,
        skills: split_skills(field(columns.skills, COL_SKILLS)?),
    })
}
