use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::Completer;
use crate::mcp::registry::ToolRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// All text generation goes through this. `Arc<dyn Completer>` so tests
    /// can swap in a scripted backend.
    pub llm: Arc<dyn Completer>,
    pub config: Config,
    /// Populated during startup registration, read-only afterwards.
    pub tools: Arc<ToolRegistry>,
}
