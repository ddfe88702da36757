mod config;
mod db;
mod errors;
mod letters;
mod llm_client;
mod mcp;
mod models;
mod outreach;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{Completer, LlmClient};
use crate::mcp::registry::ToolRegistry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Strive API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, 10).await?;

    // Initialize LLM client
    let llm: Arc<dyn Completer> = Arc::new(LlmClient::new(config.anthropic_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Register the generation tools. All registration happens before the
    // server starts; the registry is read-only afterwards.
    let mut registry = ToolRegistry::new();
    outreach::register_tools(&mut registry, Arc::clone(&llm));
    resume::register_tools(&mut registry, Arc::clone(&llm));
    letters::register_tools(&mut registry, Arc::clone(&llm), config.portfolio_url.clone());
    info!(
        "{} tools registered under {}",
        registry.tool_names().len(),
        config.tools_prefix
    );

    // Build app state
    let state = AppState {
        db,
        llm,
        config: config.clone(),
        tools: Arc::new(registry),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
