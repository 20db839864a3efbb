use std::sync::Arc;

use crate::config::Config;
use crate::truth_engine::ProfileSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream profile source. `TruthEngineClient` in production, stubs in tests.
    pub source: Arc<dyn ProfileSource>,
    pub config: Config,
}
