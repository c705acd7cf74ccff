//! Analyzer backends: trait-based producers of the dashboard sections.
//!
//! - `RemoteAnalyzer`: the external analysis service.
//! - `HeuristicAnalyzer`: local keyword scoring, never fails.
//! - `FallbackAnalyzer`: remote first, heuristic on any error.
//!
//! `AppState` holds an `Arc<dyn CareerAnalyzer>`, chosen at startup from config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::matcher::{match_skills, SkillMatchResult};
use crate::analysis::readiness::{assess_resume, ResumeAssessment};
use crate::analysis::report::{render_sections, ReportContext};
use crate::analysis::tables::HeuristicTables;
use crate::analysis_client::{AnalysisClient, RemoteAnalysisRequest};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisInput, AnalysisSections, AnalysisSource};

/// What an analyzer produced, plus the computed values when they exist locally.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub source: AnalysisSource,
    pub sections: AnalysisSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<ResumeAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<SkillMatchResult>,
}

#[async_trait]
pub trait CareerAnalyzer: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicAnalyzer {
    tables: Arc<HeuristicTables>,
}

impl HeuristicAnalyzer {
    pub fn new(tables: Arc<HeuristicTables>) -> Self {
        Self { tables }
    }

    /// Synchronous core of the heuristic path. Missing resume text is scored
    /// as empty text.
    pub fn run(&self, input: &AnalysisInput) -> AnalysisOutcome {
        let resume_text = input.resume_text.as_deref().unwrap_or_default();
        let assessment = assess_resume(resume_text, &self.tables);
        let skill_match = match_skills(&input.current_skills, &input.required_skills);

        let sections = render_sections(&ReportContext {
            target_role: input.target_role.trim(),
            timeframe: &input.timeframe,
            assessment: &assessment,
            skill_match: &skill_match,
            required_skills: &input.required_skills,
            big_tech: &self.tables.big_tech,
        });

        AnalysisOutcome {
            source: AnalysisSource::Heuristic,
            sections,
            assessment: Some(assessment),
            skill_match: Some(skill_match),
        }
    }
}

#[async_trait]
impl CareerAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AppError> {
        Ok(self.run(input))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct RemoteAnalyzer(pub AnalysisClient);

#[async_trait]
impl CareerAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AppError> {
        let request = RemoteAnalysisRequest::from_input(input);
        let sections = self
            .0
            .analyze(&request)
            .await
            .map_err(|e| AppError::Upstream(format!("Analysis service failed: {e}")))?;

        Ok(AnalysisOutcome {
            source: AnalysisSource::Remote,
            sections,
            assessment: None,
            skill_match: None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary` once; any error falls through to the heuristic path.
pub struct FallbackAnalyzer {
    primary: Arc<dyn CareerAnalyzer>,
    fallback: HeuristicAnalyzer,
}

impl FallbackAnalyzer {
    pub fn new(primary: Arc<dyn CareerAnalyzer>, fallback: HeuristicAnalyzer) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl CareerAnalyzer for FallbackAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome, AppError> {
        match self.primary.analyze(input).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!("Primary analysis failed, using heuristic fallback: {e}");
                let outcome = self.fallback.run(input);
                info!(
                    "Heuristic readiness for '{}': {}/100",
                    input.target_role.trim(),
                    outcome.assessment.as_ref().map_or(0, |a| a.score)
                );
                Ok(outcome)
            }
        }
    }
}
