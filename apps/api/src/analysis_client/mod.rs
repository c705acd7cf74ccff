/// Analysis service client: the only code that talks to the external
/// career-analysis service.
///
/// One attempt per request, no retries. Every failure is returned to the
/// caller, which falls back to the local heuristic analyzer.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::analysis::{AnalysisInput, AnalysisSections};

const ANALYZE_PATH: &str = "/api/analyze";
/// Resume text forwarded to the service is cut to this many characters.
const MAX_RESUME_CHARS: usize = 2000;
/// Sent when the caller has no id; the service rejects a null `user_id`.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

#[derive(Debug, Error)]
pub enum AnalysisClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Analysis service returned no sections")]
    Incomplete,
}

/// Request body understood by the analysis service.
#[derive(Debug, Serialize)]
pub struct RemoteAnalysisRequest<'a> {
    pub user_id: &'a str,
    pub target_role: &'a str,
    pub current_skills: &'a [String],
    pub timeframe_months: u32,
    pub timeframe_display: String,
    pub resume_text: Option<&'a str>,
}

impl<'a> RemoteAnalysisRequest<'a> {
    pub fn from_input(input: &'a AnalysisInput) -> Self {
        Self {
            user_id: input
                .user_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .unwrap_or(ANONYMOUS_USER_ID),
            target_role: input.target_role.trim(),
            current_skills: &input.current_skills,
            timeframe_months: input.timeframe.in_months(),
            timeframe_display: input.timeframe.to_string(),
            resume_text: input
                .resume_text
                .as_deref()
                .filter(|t| !t.trim().is_empty())
                .map(|t| truncate_chars(t, MAX_RESUME_CHARS)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RemoteAnalysisResponse {
    final_recommendations: Option<String>,
    market_research: Option<String>,
    learning_plan: Option<String>,
    application_strategy: Option<String>,
}

impl RemoteAnalysisResponse {
    /// Fills absent sections with placeholders. A response with no sections
    /// at all is treated as a failure.
    fn into_sections(self) -> Result<AnalysisSections, AnalysisClientError> {
        if self.final_recommendations.is_none()
            && self.market_research.is_none()
            && self.learning_plan.is_none()
            && self.application_strategy.is_none()
        {
            return Err(AnalysisClientError::Incomplete);
        }

        Ok(AnalysisSections {
            final_recommendations: self
                .final_recommendations
                .unwrap_or_else(|| "No recommendations available.".to_string()),
            market_research: self
                .market_research
                .unwrap_or_else(|| "No market data available.".to_string()),
            learning_plan: self
                .learning_plan
                .unwrap_or_else(|| "No learning plan available.".to_string()),
            application_strategy: self
                .application_strategy
                .unwrap_or_else(|| "No strategy available.".to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AnalysisClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: analyze_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the analysis request and returns the four sections.
    pub async fn analyze(
        &self,
        request: &RemoteAnalysisRequest<'_>,
    ) -> Result<AnalysisSections, AnalysisClientError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AnalysisClientError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: RemoteAnalysisResponse = serde_json::from_str(&body)?;
        debug!(
            "Analysis service responded for role '{}' ({} bytes)",
            request.target_role,
            body.len()
        );
        parsed.into_sections()
    }
}

fn analyze_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}

/// Pulls `detail` out of the service's error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ServiceErrorBody>(body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| body.to_string())
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::timeframe::{TimeUnit, Timeframe};

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            analyze_endpoint("http://localhost:8000/"),
            "http://localhost:8000/api/analyze"
        );
        assert_eq!(
            analyze_endpoint("http://localhost:8000"),
            "http://localhost:8000/api/analyze"
        );
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail": "Please enter a message or career goal"}"#),
            "Please enter a message or career goal"
        );
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_request_from_input() {
        let input = AnalysisInput {
            target_role: "  Data Engineer ".to_string(),
            current_skills: vec!["SQL".to_string()],
            timeframe: Timeframe::new(45, TimeUnit::Days),
            resume_text: Some("x".repeat(MAX_RESUME_CHARS + 50)),
            ..AnalysisInput::default()
        };
        let request = RemoteAnalysisRequest::from_input(&input);
        assert_eq!(request.target_role, "Data Engineer");
        assert_eq!(request.timeframe_months, 2);
        assert_eq!(request.timeframe_display, "45 days");
        assert_eq!(request.resume_text.map(str::len), Some(MAX_RESUME_CHARS));
        assert_eq!(request.user_id, ANONYMOUS_USER_ID);
    }

    #[test]
    fn test_serialized_request_always_has_string_user_id() {
        let input = AnalysisInput {
            target_role: "SRE".to_string(),
            ..AnalysisInput::default()
        };
        let body = serde_json::to_value(RemoteAnalysisRequest::from_input(&input)).unwrap();
        assert_eq!(body["user_id"], "anonymous");

        let input = AnalysisInput {
            user_id: Some("guest-42".to_string()),
            target_role: "SRE".to_string(),
            ..AnalysisInput::default()
        };
        let body = serde_json::to_value(RemoteAnalysisRequest::from_input(&input)).unwrap();
        assert_eq!(body["user_id"], "guest-42");
    }

    #[test]
    fn test_blank_resume_not_forwarded() {
        let input = AnalysisInput {
            target_role: "SRE".to_string(),
            resume_text: Some("   ".to_string()),
            ..AnalysisInput::default()
        };
        assert!(RemoteAnalysisRequest::from_input(&input).resume_text.is_none());
    }

    #[test]
    fn test_partial_response_gets_placeholders() {
        let response: RemoteAnalysisResponse =
            serde_json::from_str(r#"{"final_recommendations": "Go for it"}"#).unwrap();
        let sections = response.into_sections().unwrap();
        assert_eq!(sections.final_recommendations, "Go for it");
        assert_eq!(sections.learning_plan, "No learning plan available.");
    }

    #[test]
    fn test_empty_response_is_incomplete() {
        let response: RemoteAnalysisResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_sections(),
            Err(AnalysisClientError::Incomplete)
        ));
    }
}
