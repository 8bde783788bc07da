//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::assessment::Support;
use crate::recommendation::matcher::{recommend, ScoredRecord};
use crate::recommendation::response_parser::{parse, ExtractionConstraints};
use crate::state::AppState;

pub const NO_MATCHES_MESSAGE: &str = "No suitable assessments found.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Ok,
    NoMatches,
}

/// Display view of a recommended assessment.
#[derive(Debug, Serialize)]
pub struct RecommendationItem {
    pub name: String,
    pub url: String,
    pub duration_minutes: u32,
    pub test_type: String,
    pub remote_support: Support,
    pub adaptive_support: Support,
    pub match_score: usize,
}

impl From<&ScoredRecord<'_>> for RecommendationItem {
    fn from(scored: &ScoredRecord<'_>) -> Self {
        let record = scored.record;
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            duration_minutes: record.duration_minutes,
            test_type: record.test_type.clone(),
            remote_support: record.remote_support,
            adaptive_support: record.adaptive_support,
            match_score: scored.match_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub status: RecommendationStatus,
    pub message: Option<String>,
    /// The model's reply, verbatim, so callers can show what was extracted.
    pub extracted_text: String,
    pub constraints: ExtractionConstraints,
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extracted_text: String,
    pub constraints: ExtractionConstraints,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Full pipeline: extract → parse → filter/score/rank against the catalog.
/// An empty ranking is a successful `no_matches` response, not an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let (extracted_text, constraints) = extract_constraints(&state, &request.query).await?;

    let ranked = recommend(&state.catalog, &constraints);
    info!(
        "Ranked {} of {} assessments (skills={}, limit={}min)",
        ranked.len(),
        state.catalog.len(),
        constraints.required_skills.len(),
        constraints.duration_limit_minutes
    );

    let recommendations: Vec<RecommendationItem> =
        ranked.iter().map(RecommendationItem::from).collect();

    let (status, message) = if recommendations.is_empty() {
        (
            RecommendationStatus::NoMatches,
            Some(NO_MATCHES_MESSAGE.to_string()),
        )
    } else {
        (RecommendationStatus::Ok, None)
    };

    Ok(Json(RecommendResponse {
        status,
        message,
        extracted_text,
        constraints,
        recommendations,
    }))
}

/// POST /api/v1/recommendations/extract
///
/// Runs extraction and parsing only. Useful for previewing what the model pulled
/// out of a job description before ranking.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let (extracted_text, constraints) = extract_constraints(&state, &request.query).await?;

    Ok(Json(ExtractResponse {
        extracted_text,
        constraints,
    }))
}

/// Rejects blank queries, then makes the single extraction call and parses the reply.
async fn extract_constraints(
    state: &AppState,
    query: &str,
) -> Result<(String, ExtractionConstraints), AppError> {
    if query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let extracted_text = state.extractor.extract(query).await?;
    let constraints = parse(&extracted_text);
    debug!(
        "Extracted constraints: skills={:?}, duration_limit={}",
        constraints.required_skills, constraints.duration_limit_minutes
    );

    Ok((extracted_text, constraints))
}
