// Outreach: LinkedIn connection requests and job-inquiry messages.
// All LLM calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use serde_json::{json, Value};

use crate::llm_client::Completer;
use crate::mcp::registry::{optional_str, required_str, ParamType, ToolBuilder, ToolRegistry};

/// Registers the outreach generation tools. The tools are pure generation;
/// persistence lives in the task endpoints.
pub fn register_tools(registry: &mut ToolRegistry, llm: Arc<dyn Completer>) {
    let connection_llm = Arc::clone(&llm);
    registry.register(
        ToolBuilder::new("generate_linkedin_connection_request")
            .description(
                "Generates a short LinkedIn connection request (under 300 characters).\n\
                 Mentions the person's About section when one is supplied.",
            )
            .required("name", ParamType::String)
            .optional("about_section", ParamType::String, json!(""))
            .param_doc("name", "Who the user wants to connect with")
            .param_doc("about_section", "The person's LinkedIn About section, if known")
            .returns(ParamType::String)
            .handler(move |args| {
                let llm = Arc::clone(&connection_llm);
                async move {
                    let name = required_str(&args, "name")?;
                    let about_section = optional_str(&args, "about_section");
                    let message =
                        generator::connection_request(llm.as_ref(), &name, &about_section).await?;
                    Ok(Value::String(message))
                }
            })
            .build(),
    );

    let inquiry_llm = llm;
    registry.register(
        ToolBuilder::new("linkedin_job_inquiry_request")
            .description(
                "Generates a short LinkedIn job inquiry request (under 300 characters).\n\
                 States that the user has already applied and asks for a brief conversation.",
            )
            .required("name", ParamType::String)
            .optional("about_section", ParamType::String, json!(""))
            .optional("job_posting", ParamType::String, json!(""))
            .returns(ParamType::String)
            .handler(move |args| {
                let llm = Arc::clone(&inquiry_llm);
                async move {
                    let name = required_str(&args, "name")?;
                    let about_section = optional_str(&args, "about_section");
                    let job_posting = optional_str(&args, "job_posting");
                    let message =
                        generator::job_inquiry(llm.as_ref(), &name, &about_section, &job_posting)
                            .await?;
                    Ok(Value::String(message))
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

    #[tokio::test]
    async fn registers_both_outreach_tools() {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry, Arc::new(ScriptedCompleter::single("hi")));
        assert_eq!(
            registry.tool_names(),
            vec![
                "generate_linkedin_connection_request",
                "linkedin_job_inquiry_request"
            ]
        );
    }

    #[tokio::test]
    async fn connection_tool_returns_the_generated_message() {
        let mut registry = ToolRegistry::new();
        register_tools(
            &mut registry,
            Arc::new(ScriptedCompleter::single("Hi Alice, let's connect!")),
        );
        let mut args = ToolArgs::new();
        args.insert("name".to_string(), json!("Alice"));
        let result = registry
            .execute("generate_linkedin_connection_request", args)
            .await
            .unwrap();
        assert_eq!(result, json!("Hi Alice, let's connect!"));
    }

    #[tokio::test]
    async fn connection_tool_requires_a_name() {
        let mut registry = ToolRegistry::new();
        register_tools(&mut registry, Arc::new(ScriptedCompleter::single("hi")));
        let err = registry
            .execute("generate_linkedin_connection_request", ToolArgs::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing required string argument"));
    }
}
