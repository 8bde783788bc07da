//! Matcher/Ranker — filters the catalog by duration and ranks by skill overlap.
//!
//! Algorithm:
//! 1. Keep records with `duration_minutes <= duration_limit_minutes`.
//! 2. `match_score` = number of required skills (duplicates included) present in the
//!    record's skill set.
//! 3. Stable sort by `match_score` descending, keep the first `MAX_RECOMMENDATIONS`.

use crate::catalog::Catalog;
use crate::models::assessment::AssessmentRecord;
use crate::recommendation::response_parser::ExtractionConstraints;

pub const MAX_RECOMMENDATIONS: usize = 10;

/// A catalog record paired with its score for one ranking call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord<'a> {
    pub record: &'a AssessmentRecord,
    pub match_score: usize,
}

/// Ranks the catalog against the constraints. An empty result means nothing fit the
/// duration limit and is not an error.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    constraints: &ExtractionConstraints,
) -> Vec<ScoredRecord<'a>> {
    let mut scored: Vec<ScoredRecord<'a>> = catalog
        .records()
        .iter()
        .filter(|record| record.duration_minutes <= constraints.duration_limit_minutes)
        .map(|record| ScoredRecord {
            record,
            match_score: match_score(record, &constraints.required_skills),
        })
        .collect();

    // `sort_by` is stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(MAX_RECOMMENDATIONS);
    scored
}

/// Per-skill membership sum. A skill listed twice in the query counts twice.
pub fn match_score(record: &AssessmentRecord, required_skills: &[String]) -> usize {
    required_skills
        .iter()
        .filter(|skill| record.has_skill(skill.as_str()))
        .count()
}
