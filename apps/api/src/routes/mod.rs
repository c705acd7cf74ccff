pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .route("/api/parse-resume", post(handlers::handle_parse_resume))
        .route("/api/skills/match", post(handlers::handle_match_skills))
        .route("/api/resume/assess", post(handlers::handle_assess_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::analyzer::HeuristicAnalyzer;
    use crate::analysis::tables::HeuristicTables;
    use crate::config::Config;

    const BOUNDARY: &str = "careerpath-test-boundary";

    fn test_router() -> Router {
        let tables = Arc::new(HeuristicTables::embedded().unwrap());
        let state = AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                analysis_service_url: None,
                analysis_timeout_secs: 1,
                heuristics_path: None,
            },
            tables: tables.clone(),
            analyzer: Arc::new(HeuristicAnalyzer::new(tables)),
        };
        build_router(state)
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(f) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n\
                     Content-Type: text/plain\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post("/api/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["analysis_backend"], "heuristic");
    }

    #[tokio::test]
    async fn test_analyze_heuristic() {
        let (status, body) = send(post_json(
            "/api/analyze",
            json!({
                "target_role": "Data Analyst",
                "current_skills": ["python", "Advanced SQL"],
                "required_skills": ["Python", "SQL", "Docker"],
                "timeframe": {"value": 2, "unit": "years"},
                "resume_text": ""
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "heuristic");
        assert_eq!(body["assessment"]["score"], 5);
        assert_eq!(body["skill_match"]["matched"], json!(["Python", "SQL"]));
        assert_eq!(body["skill_match"]["missing"], json!(["Docker"]));
        assert!(body["analysis_id"].is_string());
        assert!(body["sections"]["final_recommendations"]
            .as_str()
            .unwrap()
            .contains("Is 2 years realistic?"));
    }

    #[tokio::test]
    async fn test_analyze_accepts_free_form_user_id() {
        let (status, body) = send(post_json(
            "/api/analyze",
            json!({"user_id": "guest-42", "target_role": "Data Analyst"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "heuristic");
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_role() {
        let (status, body) = send(post_json("/api/analyze", json!({"target_role": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_greeting_short_circuits() {
        let (status, body) = send(post_json("/api/analyze", json!({"target_role": "Hello"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "greeting");
        assert!(body.get("assessment").is_none());
    }

    #[tokio::test]
    async fn test_match_skills_endpoint() {
        let (status, body) = send(post_json(
            "/api/skills/match",
            json!({
                "current_skills": ["python", "Advanced SQL"],
                "required_skills": ["Python", "SQL", "Docker"]
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"matched": ["Python", "SQL"], "missing": ["Docker"]}));
    }

    #[tokio::test]
    async fn test_assess_resume_endpoint() {
        let (status, body) = send(post_json(
            "/api/resume/assess",
            json!({"resume_text": "5 years of experience at Google, built 3 projects, Master's degree, AWS Certified, skills: Python, SQL"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 83);
        assert_eq!(body["signals"]["education_level"], "Masters");
        assert_eq!(body["signals"]["companies"], json!(["Google"]));
    }

    #[tokio::test]
    async fn test_parse_resume_text_upload() {
        let (status, body) = send(multipart_request(&[
            ("file", Some("resume.txt"), "Python and Docker, 2 years of experience"),
            ("current_skills", None, r#"["python", "Rust"]"#),
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "resume.txt");
        assert_eq!(body["extracted_skills"], json!(["Python", "Docker"]));
        assert_eq!(body["merged_skills"], json!(["python", "Rust", "Docker"]));
    }

    #[tokio::test]
    async fn test_parse_resume_requires_file() {
        let (status, body) = send(multipart_request(&[("current_skills", None, "[]")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Missing 'file' field");
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_bad_skills_field() {
        let (status, _) = send(multipart_request(&[
            ("file", Some("resume.txt"), "Rust"),
            ("current_skills", None, "not json"),
        ]))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
