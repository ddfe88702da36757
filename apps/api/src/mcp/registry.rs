#![allow(dead_code)]

//! Tool Registry — owns the catalog of callable tools and executes them by name.
//!
//! Tools are declared with [`ToolBuilder`]: parameter names, semantic types,
//! defaults, and the async callable are all stated explicitly at registration,
//! so the registry never has to guess at a signature. Registration is total
//! and cannot fail; a second registration under the same name replaces the
//! first (last write wins).

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{info, warn};

/// Argument map handed to a tool's callable: parameter name → JSON value.
pub type ToolArgs = Map<String, Value>;

type ToolFuture = Pin<Box<dyn Future<Output = anyhow::Result<Value>> + Send>>;
type ToolHandlerFn = Box<dyn Fn(ToolArgs) -> ToolFuture + Send + Sync>;

/// Semantic type tag for tool parameters and return values.
///
/// `Any` is the permissive fallback for parameters whose type the author did
/// not pin down; it accepts every JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Any,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Object => "object",
            ParamType::Array => "array",
            ParamType::Any => "any",
        }
    }

    /// OpenAPI type name. Unmapped types render as "string".
    pub fn openapi_type(&self) -> &'static str {
        match self {
            ParamType::Any => "string",
            other => other.as_str(),
        }
    }

    /// Whether `value` is acceptable for this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Number => value.is_number(),
            ParamType::Boolean => value.is_boolean(),
            ParamType::Object => value.is_object(),
            ParamType::Array => value.is_array(),
            ParamType::Any => true,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one input of a tool. Derived once at registration, never mutated.
///
/// `required` is true iff no default was supplied; [`ToolBuilder`] enforces
/// that pairing, so the two can never drift apart.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub ty: ParamType,
    pub required: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
}

/// One registered capability: metadata plus the owned async callable.
pub struct ToolDescriptor {
    name: String,
    description: String,
    parameters: Vec<(String, ParameterSpec)>,
    return_type: ParamType,
    handler: ToolHandlerFn,
}

impl ToolDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[(String, ParameterSpec)] {
        &self.parameters
    }

    pub fn return_type(&self) -> ParamType {
        self.return_type
    }

    fn call(&self, args: ToolArgs) -> ToolFuture {
        (self.handler)(args)
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .finish_non_exhaustive()
    }
}

/// Fluent construction of a [`ToolDescriptor`].
///
/// `build` is total: a builder with no handler produces a descriptor whose
/// invocation fails, surfacing like any other execution error rather than
/// failing registration.
pub struct ToolBuilder {
    name: String,
    description: String,
    parameters: Vec<(String, ParameterSpec)>,
    return_type: ParamType,
    handler: Option<ToolHandlerFn>,
}

impl ToolBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            return_type: ParamType::Any,
            handler: None,
        }
    }

    /// Free-text description. The first line doubles as the summary in the
    /// schema document.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Declares a mandatory parameter (no default).
    pub fn required(mut self, name: impl Into<String>, ty: ParamType) -> Self {
        self.parameters.push((
            name.into(),
            ParameterSpec {
                ty,
                required: true,
                default: None,
                description: None,
            },
        ));
        self
    }

    /// Declares an optional parameter with its default value.
    pub fn optional(mut self, name: impl Into<String>, ty: ParamType, default: Value) -> Self {
        self.parameters.push((
            name.into(),
            ParameterSpec {
                ty,
                required: false,
                default: Some(default),
                description: None,
            },
        ));
        self
    }

    /// Attaches a description to an already-declared parameter. Unknown names
    /// are ignored so descriptor construction stays total.
    pub fn param_doc(mut self, name: &str, text: impl Into<String>) -> Self {
        if let Some((_, spec)) = self.parameters.iter_mut().find(|(n, _)| n == name) {
            spec.description = Some(text.into());
        }
        self
    }

    pub fn returns(mut self, ty: ParamType) -> Self {
        self.return_type = ty;
        self
    }

    /// Binds the async callable. The callable receives the validated argument
    /// map and returns its result as a JSON value; any error it raises is
    /// propagated unmodified to the execution caller.
    pub fn handler<F, Fut>(mut self, f: F) -> Self
    where
        F: Fn(ToolArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        self.handler = Some(Box::new(move |args| Box::pin(f(args))));
        self
    }

    pub fn build(self) -> ToolDescriptor {
        let handler = self.handler.unwrap_or_else(|| {
            let name = self.name.clone();
            Box::new(move |_args| {
                let name = name.clone();
                Box::pin(async move { Err(anyhow::anyhow!("tool '{name}' has no handler bound")) })
            })
        });
        ToolDescriptor {
            name: self.name,
            description: self.description,
            parameters: self.parameters,
            return_type: self.return_type,
            handler,
        }
    }
}

/// Failure modes of [`ToolRegistry::execute`].
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A failure raised by the tool's own callable, message preserved.
    #[error("{0}")]
    Execution(anyhow::Error),
}

/// Render-friendly projection of a descriptor for the info endpoint.
#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: Map<String, Value>,
    pub return_type: String,
}

/// The catalog: `name → ToolDescriptor`, with insertion order retained for
/// listings. Mutated only during startup registration.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDescriptor>,
    order: Vec<String>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a descriptor. Replacement keeps the name's original
    /// slot in the listing order, so a name never appears twice.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        let name = descriptor.name().to_string();
        if self.tools.insert(name.clone(), descriptor).is_some() {
            warn!("tool '{name}' re-registered, previous descriptor replaced");
        } else {
            info!("registered tool '{name}'");
            self.order.push(name);
        }
    }

    /// Registered names in insertion order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Invokes a tool by name. The callable's result is returned unmodified;
    /// its failures propagate as [`ToolError::Execution`] so the transport
    /// layer decides how to present them.
    pub async fn execute(&self, name: &str, args: ToolArgs) -> Result<Value, ToolError> {
        let descriptor = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        descriptor.call(args).await.map_err(ToolError::Execution)
    }

    /// Projection for the info endpoint, or `None` for unknown names. Callers
    /// distinguish "not found" by checking the option, not by catching.
    pub fn describe(&self, name: &str) -> Option<ToolInfo> {
        let descriptor = self.tools.get(name)?;
        let mut parameters = Map::new();
        for (param_name, spec) in descriptor.parameters() {
            let mut entry = Map::new();
            entry.insert("type".to_string(), json!(spec.ty.as_str()));
            entry.insert("required".to_string(), json!(spec.required));
            if let Some(default) = &spec.default {
                entry.insert("default".to_string(), default.clone());
            }
            if let Some(text) = &spec.description {
                entry.insert("description".to_string(), json!(text));
            }
            parameters.insert(param_name.clone(), Value::Object(entry));
        }
        Some(ToolInfo {
            name: descriptor.name().to_string(),
            description: descriptor.description().to_string(),
            parameters,
            return_type: descriptor.return_type().to_string(),
        })
    }

    /// Renders every tool as one POST path in an OpenAPI-style document.
    pub fn to_schema_document(&self, prefix: &str) -> Value {
        let mut paths = Map::new();
        for tool in self.iter() {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for (param_name, spec) in tool.parameters() {
                let mut field = Map::new();
                field.insert("type".to_string(), json!(spec.ty.openapi_type()));
                if let Some(default) = &spec.default {
                    field.insert("default".to_string(), default.clone());
                }
                if let Some(text) = &spec.description {
                    field.insert("description".to_string(), json!(text));
                }
                properties.insert(param_name.clone(), Value::Object(field));
                if spec.required {
                    required.push(json!(param_name));
                }
            }
            let summary = tool.description().lines().next().unwrap_or_default();
            paths.insert(
                format!("{prefix}/{}", tool.name()),
                json!({
                    "post": {
                        "summary": summary,
                        "description": tool.description(),
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": properties,
                                        "required": required,
                                    }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Tool executed",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "object" }
                                    }
                                }
                            }
                        }
                    }
                }),
            );
        }
        json!({
            "openapi": "3.0.0",
            "info": {
                "title": "Strive tool endpoints",
                "version": env!("CARGO_PKG_VERSION"),
            },
            "paths": paths,
        })
    }
}

/// Fetches a required string argument from a tool argument map.
pub fn required_str(args: &ToolArgs, key: &str) -> anyhow::Result<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| anyhow::anyhow!("missing required string argument '{key}'"))
}

/// Fetches an optional string argument, empty when absent.
pub fn optional_str(args: &ToolArgs, key: &str) -> String {
    args.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_tool(name: &str, reply: &'static str) -> ToolDescriptor {
        ToolBuilder::new(name)
            .description("Echoes a fixed reply.")
            .required("x", ParamType::String)
            .returns(ParamType::String)
            .handler(move |_args| async move { Ok(json!(reply)) })
            .build()
    }

    #[test]
    fn listing_follows_insertion_order() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("b_tool", "b"));
        registry.register(echo_tool("a_tool", "a"));
        assert_eq!(registry.tool_names(), vec!["b_tool", "a_tool"]);
    }

    #[test]
    fn reregistration_keeps_a_single_listing_entry() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("dup", "one"));
        registry.register(echo_tool("dup", "two"));
        assert_eq!(registry.tool_names(), vec!["dup"]);
    }

    #[tokio::test]
    async fn reregistration_replaces_the_callable() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("dup", "one"));
        registry.register(echo_tool("dup", "two"));
        let result = registry.execute("dup", ToolArgs::new()).await.unwrap();
        assert_eq!(result, json!("two"));
    }

    #[tokio::test]
    async fn execute_unknown_tool_is_not_found() {
        let registry = ToolRegistry::new();
        let err = registry
            .execute("nonexistent", ToolArgs::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert_eq!(err.to_string(), "Tool not found: nonexistent");
    }

    #[tokio::test]
    async fn execute_passes_arguments_through() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolBuilder::new("shout")
                .required("word", ParamType::String)
                .returns(ParamType::String)
                .handler(|args| async move {
                    let word = required_str(&args, "word")?;
                    Ok(json!(word.to_uppercase()))
                })
                .build(),
        );
        let mut args = ToolArgs::new();
        args.insert("word".to_string(), json!("hi"));
        let result = registry.execute("shout", args).await.unwrap();
        assert_eq!(result, json!("HI"));
    }

    #[tokio::test]
    async fn execution_failures_keep_the_original_message() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolBuilder::new("fail")
                .returns(ParamType::String)
                .handler(|_args| async move { Err(anyhow::anyhow!("tool exploded")) })
                .build(),
        );
        let err = registry.execute("fail", ToolArgs::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "tool exploded");
    }

    #[tokio::test]
    async fn builder_without_handler_fails_at_execution_not_registration() {
        let mut registry = ToolRegistry::new();
        registry.register(ToolBuilder::new("stub").build());
        let err = registry.execute("stub", ToolArgs::new()).await.unwrap_err();
        assert!(err.to_string().contains("no handler bound"));
    }

    #[test]
    fn describe_unknown_tool_is_none() {
        let registry = ToolRegistry::new();
        assert!(registry.describe("nonexistent").is_none());
    }

    #[test]
    fn describe_projects_stringified_types_and_defaults() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolBuilder::new("greet")
                .description("Greets someone.\nSecond line of detail.")
                .required("name", ParamType::String)
                .optional("excited", ParamType::Boolean, json!(false))
                .param_doc("name", "Who to greet")
                .returns(ParamType::String)
                .build(),
        );
        let info = registry.describe("greet").unwrap();
        assert_eq!(info.name, "greet");
        assert_eq!(info.return_type, "string");
        let name = info.parameters.get("name").unwrap();
        assert_eq!(name["type"], json!("string"));
        assert_eq!(name["required"], json!(true));
        assert_eq!(name["description"], json!("Who to greet"));
        let excited = info.parameters.get("excited").unwrap();
        assert_eq!(excited["required"], json!(false));
        assert_eq!(excited["default"], json!(false));
    }

    #[test]
    fn schema_document_maps_types_and_required_list() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolBuilder::new("mix")
                .description("Mixes inputs.")
                .required("text", ParamType::String)
                .required("count", ParamType::Integer)
                .optional("extras", ParamType::Any, json!(null))
                .returns(ParamType::Object)
                .build(),
        );
        let document = registry.to_schema_document("/tools");
        let schema = &document["paths"]["/tools/mix"]["post"]["requestBody"]["content"]
            ["application/json"]["schema"];
        assert_eq!(schema["properties"]["text"]["type"], json!("string"));
        assert_eq!(schema["properties"]["count"]["type"], json!("integer"));
        // Unmapped types degrade to "string" in the document.
        assert_eq!(schema["properties"]["extras"]["type"], json!("string"));
        assert_eq!(schema["required"], json!(["text", "count"]));
        assert_eq!(
            document["paths"]["/tools/mix"]["post"]["summary"],
            json!("Mixes inputs.")
        );
    }

    #[test]
    fn param_type_matching() {
        assert!(ParamType::String.matches(&json!("s")));
        assert!(!ParamType::String.matches(&json!(1)));
        assert!(ParamType::Integer.matches(&json!(3)));
        assert!(!ParamType::Integer.matches(&json!(3.5)));
        assert!(ParamType::Number.matches(&json!(3.5)));
        assert!(ParamType::Number.matches(&json!(3)));
        assert!(ParamType::Boolean.matches(&json!(true)));
        assert!(ParamType::Array.matches(&json!([1, 2])));
        assert!(ParamType::Object.matches(&json!({"k": 1})));
        assert!(ParamType::Any.matches(&json!(null)));
        assert!(ParamType::Any.matches(&json!([1])));
    }
}
