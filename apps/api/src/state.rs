use std::sync::Arc;

use crate::catalog::Catalog;
use crate::interests::store::InterestsStore;
use crate::matching::ranker::CareerMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Reference data, validated at startup and never mutated afterwards.
    pub catalog: Arc<Catalog>,
    /// Pluggable ranker. Default: CosineCareerMatcher with the fixed weights.
    pub matcher: Arc<dyn CareerMatcher>,
    /// Saved preferences. Memory by default, JSON file via INTERESTS_STORE_PATH.
    pub interests: Arc<dyn InterestsStore>,
}
