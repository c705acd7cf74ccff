mod analysis;
mod analysis_client;
mod config;
mod errors;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{CareerAnalyzer, FallbackAnalyzer, HeuristicAnalyzer, RemoteAnalyzer};
use crate::analysis::tables::HeuristicTables;
use crate::analysis_client::AnalysisClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    let tables = Arc::new(HeuristicTables::load(
        config.heuristics_path.as_deref().map(Path::new),
    )?);

    // Heuristic-only unless an analysis service is configured
    let analyzer: Arc<dyn CareerAnalyzer> = match &config.analysis_service_url {
        Some(url) => {
            let client = AnalysisClient::new(
                url,
                Duration::from_secs(config.analysis_timeout_secs),
            )?;
            info!("Analysis service at {}", client.endpoint());
            Arc::new(FallbackAnalyzer::new(
                Arc::new(RemoteAnalyzer(client)),
                HeuristicAnalyzer::new(tables.clone()),
            ))
        }
        None => {
            info!("No analysis service configured, serving heuristic analysis");
            Arc::new(HeuristicAnalyzer::new(tables.clone()))
        }
    };

    let state = AppState {
        config: config.clone(),
        tables,
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
