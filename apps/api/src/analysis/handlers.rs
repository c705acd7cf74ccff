//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::AnalysisOutcome;
use crate::analysis::intake::extract_resume_text;
use crate::analysis::matcher::{match_skills, SkillMatchResult};
use crate::analysis::readiness::{assess_resume, ResumeAssessment};
use crate::analysis::report::{greeting_sections, is_conversational};
use crate::analysis::skills::{extract_skills, merge_skills};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisInput, AnalysisSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub text: String,
    pub filename: String,
    pub extracted_skills: Vec<String>,
    /// Present when the upload carried the caller's current skills.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct MatchSkillsRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssessResumeRequest {
    pub resume_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Runs the configured analyzer. With an analysis service configured the
/// heuristic path is only used when the service fails.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(input): Json<AnalysisInput>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if input.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a message or career goal".to_string(),
        ));
    }

    let outcome = if is_conversational(&input.target_role) {
        AnalysisOutcome {
            source: AnalysisSource::Greeting,
            sections: greeting_sections(),
            assessment: None,
            skill_match: None,
        }
    } else {
        state.analyzer.analyze(&input).await?
    };

    let analysis_id = Uuid::new_v4();
    info!(
        "Analysis {analysis_id} for '{}' served from {:?}",
        input.target_role.trim(),
        outcome.source
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        generated_at: Utc::now(),
        outcome,
    }))
}

/// POST /api/parse-resume
///
/// Multipart upload: `file` (required) and `current_skills` (optional JSON
/// array). Returns the resume text and the vocabulary skills found in it.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    let mut current_skills: Option<Vec<String>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown.txt").to_string();
                let content = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((filename, content));
            }
            Some("current_skills") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read field: {e}")))?;
                let skills: Vec<String> = serde_json::from_str(&raw).map_err(|_| {
                    AppError::Validation("current_skills must be a JSON array of strings".to_string())
                })?;
                current_skills = Some(skills);
            }
            _ => {}
        }
    }

    let (filename, content) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let text = extract_resume_text(&filename, &content)?;
    let extracted_skills = extract_skills(&text, &state.tables.skills);
    let merged_skills = current_skills.map(|current| merge_skills(&current, &extracted_skills));

    info!(
        "Parsed resume '{filename}': {} chars, {} skills",
        text.chars().count(),
        extracted_skills.len()
    );

    Ok(Json(ParseResumeResponse {
        text,
        filename,
        extracted_skills,
        merged_skills,
    }))
}

/// POST /api/skills/match
pub async fn handle_match_skills(
    Json(request): Json<MatchSkillsRequest>,
) -> Json<SkillMatchResult> {
    Json(match_skills(&request.current_skills, &request.required_skills))
}

/// POST /api/resume/assess
///
/// Heuristic signals and readiness score for raw resume text.
pub async fn handle_assess_resume(
    State(state): State<AppState>,
    Json(request): Json<AssessResumeRequest>,
) -> Json<ResumeAssessment> {
    Json(assess_resume(&request.resume_text, &state.tables))
}
