use std::sync::Arc;

use crate::recommend::engine::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable recommender. Default: RuleBasedRecommender over the shared knowledge base.
    pub recommender: Arc<dyn Recommender>,
}
