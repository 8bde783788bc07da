use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Yes/No capability flag as it appears in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Support {
    Yes,
    No,
}

impl FromStr for Support {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "yes" => Ok(Support::Yes),
            "no" => Ok(Support::No),
            other => Err(format!("expected 'Yes' or 'No', got '{other}'")),
        }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Support::Yes => f.write_str("Yes"),
            Support::No => f.write_str("No"),
        }
    }
}

/// A single assessment product from the catalog. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRecord {
    pub name: String,
    pub url: String,
    pub duration_minutes: u32,
    pub test_type: String,
    pub remote_support: Support,
    pub adaptive_support: Support,
    /// Lower-cased, trimmed skill tags.
    pub skills: BTreeSet<String>,
}

impl AssessmentRecord {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }
}

/// Splits a semicolon-separated catalog skills cell into normalized tags.
pub fn split_skills(raw: &str) -> BTreeSet<String> {
    raw.split(';')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
