use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the external analysis service. Unset means heuristic-only.
    pub analysis_service_url: Option<String>,
    pub analysis_timeout_secs: u64,
    /// JSON file overriding the embedded heuristics table.
    pub heuristics_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            analysis_service_url: optional("ANALYSIS_SERVICE_URL"),
            analysis_timeout_secs: optional("ANALYSIS_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            heuristics_path: optional("HEURISTICS_PATH"),
        })
    }
}
