#![allow(dead_code)]

//! Request-Schema Generator — turns a tool descriptor's parameter specs into
//! a validating request schema, so arbitrary tools can be exposed as typed
//! endpoints without hand-writing one request type per tool.
//!
//! Generation is total: every legal parameter set produces a schema. Field
//! order mirrors parameter order, required/optional and defaults are carried
//! over, and `Any`-typed fields accept every JSON value.

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::mcp::registry::{ParamType, ToolArgs, ToolDescriptor};

/// One generated request field, mirrored from a `ParameterSpec`.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub ty: ParamType,
    pub required: bool,
    pub default: Option<Value>,
}

/// All violations found in one request body, joined into a single message
/// so the transport layer can report every problem at once.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SchemaViolations(String);

/// A request schema generated from one tool descriptor.
#[derive(Debug, Clone)]
pub struct RequestSchema {
    fields: Vec<FieldSpec>,
}

impl RequestSchema {
    pub fn for_tool(tool: &ToolDescriptor) -> Self {
        let fields = tool
            .parameters()
            .iter()
            .map(|(name, spec)| FieldSpec {
                name: name.clone(),
                ty: spec.ty,
                required: spec.required,
                default: spec.default.clone(),
            })
            .collect();
        Self { fields }
    }

    /// Fields in parameter order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates a request body and returns the normalized argument map.
    ///
    /// Missing required fields and type mismatches are violations; omitted
    /// optional fields fall back to their recorded default. Fields the schema
    /// does not know are ignored, so clients can send extra metadata without
    /// breaking.
    pub fn validate(&self, body: &Value) -> Result<ToolArgs, SchemaViolations> {
        let Some(object) = body.as_object() else {
            return Err(SchemaViolations(
                "request body must be a JSON object".to_string(),
            ));
        };

        let mut args = ToolArgs::new();
        let mut problems = Vec::new();
        for field in &self.fields {
            match object.get(&field.name) {
                Some(value) if field.ty.matches(value) => {
                    args.insert(field.name.clone(), value.clone());
                }
                Some(value) => problems.push(format!(
                    "field '{}' must be of type {}, got {}",
                    field.name,
                    field.ty,
                    json_type_name(value)
                )),
                None if field.required => {
                    problems.push(format!("missing required field '{}'", field.name));
                }
                None => {
                    if let Some(default) = &field.default {
                        args.insert(field.name.clone(), default.clone());
                    }
                }
            }
        }

        if problems.is_empty() {
            Ok(args)
        } else {
            Err(SchemaViolations(problems.join("; ")))
        }
    }

    /// JSON Schema rendering of the request body: type-mapped properties and
    /// the exact list of required field names.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for field in &self.fields {
            let mut entry = Map::new();
            entry.insert("type".to_string(), json!(field.ty.openapi_type()));
            if let Some(default) = &field.default {
                entry.insert("default".to_string(), default.clone());
            }
            properties.insert(field.name.clone(), Value::Object(entry));
            if field.required {
                required.push(json!(field.name));
            }
        }
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::registry::ToolBuilder;

    fn schema() -> RequestSchema {
        let tool = ToolBuilder::new("sample")
            .required("name", ParamType::String)
            .required("count", ParamType::Integer)
            .optional("greeting", ParamType::String, json!("hello"))
            .optional("payload", ParamType::Any, json!(null))
            .build();
        RequestSchema::for_tool(&tool)
    }

    #[test]
    fn field_order_matches_parameter_order() {
        let binding = schema();
        let names: Vec<&str> = binding.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["name", "count", "greeting", "payload"]);
    }

    #[test]
    fn valid_body_passes_and_defaults_fill_in() {
        let args = schema()
            .validate(&json!({"name": "alice", "count": 2}))
            .unwrap();
        assert_eq!(args.get("name"), Some(&json!("alice")));
        assert_eq!(args.get("count"), Some(&json!(2)));
        assert_eq!(args.get("greeting"), Some(&json!("hello")));
        assert_eq!(args.get("payload"), Some(&json!(null)));
    }

    #[test]
    fn missing_required_field_is_a_violation() {
        let err = schema().validate(&json!({"name": "alice"})).unwrap_err();
        assert!(err.to_string().contains("missing required field 'count'"));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let err = schema().validate(&json!({"count": "two"})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing required field 'name'"));
        assert!(message.contains("field 'count' must be of type integer"));
    }

    #[test]
    fn type_mismatch_is_a_violation() {
        let err = schema()
            .validate(&json!({"name": 7, "count": 2}))
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("field 'name' must be of type string, got number"));
    }

    #[test]
    fn any_field_accepts_every_json_value() {
        for payload in [json!(1), json!("s"), json!([1]), json!({"k": 2}), json!(null)] {
            let body = json!({"name": "a", "count": 1, "payload": payload.clone()});
            let args = schema().validate(&body).unwrap();
            assert_eq!(args.get("payload"), Some(&payload));
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let args = schema()
            .validate(&json!({"name": "a", "count": 1, "extra": true}))
            .unwrap();
        assert!(!args.contains_key("extra"));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = schema().validate(&json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
    }

    #[test]
    fn provided_optional_overrides_the_default() {
        let args = schema()
            .validate(&json!({"name": "a", "count": 1, "greeting": "yo"}))
            .unwrap();
        assert_eq!(args.get("greeting"), Some(&json!("yo")));
    }

    #[test]
    fn json_schema_lists_exactly_the_required_fields() {
        let rendered = schema().to_json_schema();
        assert_eq!(rendered["required"], json!(["name", "count"]));
        assert_eq!(rendered["properties"]["greeting"]["default"], json!("hello"));
        // Any degrades to "string" in the rendered schema.
        assert_eq!(rendered["properties"]["payload"]["type"], json!("string"));
    }

    #[test]
    fn generation_is_total_for_parameterless_tools() {
        let tool = ToolBuilder::new("noop").build();
        let schema = RequestSchema::for_tool(&tool);
        assert!(schema.fields().is_empty());
        assert!(schema.validate(&json!({})).unwrap().is_empty());
    }
}
