// Resume optimization: suggestion generation from raw text or an uploaded
// PDF, persisted against a job application.

pub mod handlers;
pub mod optimizer;
pub mod pdf;
pub mod prompts;

use std::sync::Arc;

use serde_json::Value;

use crate::llm_client::Completer;
use crate::mcp::registry::{required_str, ParamType, ToolBuilder, ToolRegistry};

/// Registers the resume optimization tool.
pub fn register_tools(registry: &mut ToolRegistry, llm: Arc<dyn Completer>) {
    registry.register(
        ToolBuilder::new("resume_optimization")
            .description(
                "Generates resume optimization suggestions for a job description.\n\
                 Identifies keywords to incorporate and recommends rewording, emphasis,\n\
                 and reordering of existing content without fabricating anything new.",
            )
            .required("resume_text", ParamType::String)
            .required("job_description", ParamType::String)
            .returns(ParamType::String)
            .handler(move |args| {
                let llm = Arc::clone(&llm);
                async move {
                    let resume_text = required_str(&args, "resume_text")?;
                    let job_description = required_str(&args, "job_description")?;
                    let suggestions = optimizer::optimization_suggestions(
                        llm.as_ref(),
                        &resume_text,
                        &job_description,
                    )
                    .await?;
                    Ok(Value::String(suggestions))
                }
            })
            .build(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedCompleter;
    use crate::mcp::registry::ToolArgs;
    use serde_json::json;

    #[tokio::test]
    async fn tool_round_trips_suggestions() {
        let mut registry = ToolRegistry::new();
        register_tools(
            &mut registry,
            Arc::new(ScriptedCompleter::single("Lead with the Rust work.")),
        );
        let mut args = ToolArgs::new();
        args.insert("resume_text".to_string(), json!("My resume"));
        args.insert("job_description".to_string(), json!("Rust role"));
        let result = registry.execute("resume_optimization", args).await.unwrap();
        assert_eq!(result, json!("Lead with the Rust work."));
    }
}
