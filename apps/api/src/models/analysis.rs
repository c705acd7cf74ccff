use serde::{Deserialize, Serialize};

use crate::analysis::timeframe::Timeframe;

/// Everything one analysis request needs. Built per request and passed by
/// reference to the analyzers; nothing about the user lives beyond it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisInput {
    /// Opaque caller id, forwarded to the analysis service as-is.
    #[serde(default)]
    pub user_id: Option<String>,
    pub target_role: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
    /// Supplied by the caller for the target role.
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// The four display sections rendered on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSections {
    pub final_recommendations: String,
    pub market_research: String,
    pub learning_plan: String,
    pub application_strategy: String,
}

/// Which path produced an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Remote,
    Heuristic,
    Greeting,
}
