use std::sync::Arc;

use crate::analysis::analyzer::CareerAnalyzer;
use crate::analysis::tables::HeuristicTables;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; per-request data travels in `AnalysisInput`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub tables: Arc<HeuristicTables>,
    /// Pluggable analyzer. Remote-with-fallback when ANALYSIS_SERVICE_URL is set,
    /// heuristic-only otherwise.
    pub analyzer: Arc<dyn CareerAnalyzer>,
}
