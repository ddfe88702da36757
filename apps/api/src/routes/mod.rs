pub mod health;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::letters::handlers as letter_handlers;
use crate::mcp;
use crate::outreach::handlers as outreach_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Strive API" }))
}

/// GET /openapi.json
/// Serves the registry's rendering of every tool as a POST path.
async fn openapi_document(State(state): State<AppState>) -> Json<Value> {
    Json(state.tools.to_schema_document(&state.config.tools_prefix))
}

pub fn build_router(state: AppState) -> Router {
    let tools = mcp::http::tool_routes(state.tools.clone(), &state.config.tools_prefix);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health::health_handler))
        .route("/openapi.json", get(openapi_document))
        // Task 1 & 2: LinkedIn outreach
        .route(
            "/task1/linkedin-request",
            post(outreach_handlers::handle_connection_request),
        )
        .route(
            "/task2/job-inquiry",
            post(outreach_handlers::handle_job_inquiry),
        )
        .route("/contacts/:id", get(outreach_handlers::handle_get_contact))
        // Task 3: resume optimization
        .route(
            "/task3/resume-optimization",
            post(resume_handlers::handle_optimize),
        )
        .route(
            "/task3/resume-optimization-pdf",
            post(resume_handlers::handle_optimize_pdf),
        )
        .route(
            "/applications/:id",
            get(resume_handlers::handle_get_application),
        )
        // Task 4: cover letters
        .route(
            "/task4/cover-letter",
            post(letter_handlers::handle_cover_letter),
        )
        .with_state(state)
        // Generated tool endpoints carry their own registry reference
        .merge(tools)
}
