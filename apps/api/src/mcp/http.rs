//! Endpoint Binder — wires every registered tool into the HTTP surface.
//!
//! One pass over the registry builds, per tool, a POST execute route and a
//! GET info route bound to that tool's own name and generated schema. Each
//! iteration clones its name into its handlers, so binding N tools yields N
//! independently-addressable handlers. A parameterized GET route catches
//! lookups of unregistered names.

use std::sync::Arc;

use axum::{
    extract::Path,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::mcp::registry::{ToolInfo, ToolRegistry};
use crate::mcp::schema::RequestSchema;

/// Builds the tool router mounted under `prefix` (which must start with `/`):
///
/// - `POST {prefix}/{name}` — validate against the tool's schema, execute,
///   reply `{"result": <value>}`.
/// - `GET {prefix}/` (and `{prefix}`) — names of all registered tools.
/// - `GET {prefix}/{name}` — descriptor projection, 404 for unknown names.
pub fn tool_routes(registry: Arc<ToolRegistry>, prefix: &str) -> Router {
    let mut router = Router::new();

    let names: Vec<String> = registry
        .tool_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for name in names {
        let Some(descriptor) = registry.get(&name) else {
            continue;
        };
        let schema = Arc::new(RequestSchema::for_tool(descriptor));

        let execute = {
            let registry = Arc::clone(&registry);
            let tool = name.clone();
            move |Json(body): Json<Value>| {
                let registry = Arc::clone(&registry);
                let schema = Arc::clone(&schema);
                let tool = tool.clone();
                async move {
                    let args = schema
                        .validate(&body)
                        .map_err(|violations| AppError::Validation(violations.to_string()))?;
                    let result = registry.execute(&tool, args).await?;
                    Ok::<_, AppError>(Json(json!({ "result": result })))
                }
            }
        };

        let info = {
            let registry = Arc::clone(&registry);
            let tool = name.clone();
            move || {
                let registry = Arc::clone(&registry);
                let tool = tool.clone();
                async move { describe_tool(&registry, &tool) }
            }
        };

        router = router.route(&format!("{prefix}/{name}"), post(execute).get(info));
    }

    let list = {
        let registry = Arc::clone(&registry);
        move || {
            let registry = Arc::clone(&registry);
            async move {
                let names: Vec<String> = registry
                    .tool_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect();
                Json(json!({ "tools": names }))
            }
        }
    };
    router = router
        .route(&format!("{prefix}/"), get(list.clone()))
        .route(prefix, get(list));

    let info_fallback = {
        let registry = Arc::clone(&registry);
        move |Path(tool_name): Path<String>| {
            let registry = Arc::clone(&registry);
            async move { describe_tool(&registry, &tool_name) }
        }
    };
    router.route(&format!("{prefix}/:tool_name"), get(info_fallback))
}

fn describe_tool(registry: &ToolRegistry, name: &str) -> Result<Json<ToolInfo>, AppError> {
    registry
        .describe(name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tool not found: {name}")))
}
