use std::sync::Arc;

use crate::catalog::Catalog;
use crate::recommendation::extractor::Extractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read concurrently by every request without locking.
    pub catalog: Arc<Catalog>,
    /// Pluggable extraction backend. Default: LlmExtractor.
    pub extractor: Arc<dyn Extractor>,
}
