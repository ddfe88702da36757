// Cover letters: two-phase generation. The initial call either produces a
// letter or asks follow-up questions; the final call folds the answers in.

pub mod generator;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;

use serde_json::{json, Value};

use crate::llm_client::Completer;
use crate::mcp::registry::{required_str, ParamType, ToolBuilder, ToolRegistry};

use generator::CoverLetterOutcome;

/// Registers the cover letter tools. `portfolio_url` is woven into the
/// prompts when the user has configured one.
pub fn register_tools(
    registry: &mut ToolRegistry,
    llm: Arc<dyn Completer>,
    portfolio_url: Option<String>,
) {
    let initial_llm = Arc::clone(&llm);
    let initial_portfolio = portfolio_url.clone();
    registry.register(
        ToolBuilder::new("generate_cover_letter_initial")
            .description(
                "Decides whether resume and job description give enough context for a\n\
                 personalized cover letter. Returns the letter, or follow-up questions\n\
                 when critical context is missing.",
            )
            .required("resume_text", ParamType::String)
            .required("job_description", ParamType::String)
            .returns(ParamType::Object)
            .handler(move |args| {
                let llm = Arc::clone(&initial_llm);
                let portfolio = initial_portfolio.clone();
                async move {
                    let resume_text = required_str(&args, "resume_text")?;
                    let job_description = required_str(&args, "job_description")?;
                    let outcome = generator::initial_letter(
                        llm.as_ref(),
                        portfolio.as_deref(),
                        &resume_text,
                        &job_description,
                    )
                    .await?;
                    Ok(match outcome {
                        CoverLetterOutcome::Letter(letter) => json!({ "cover_letter": letter }),
                        CoverLetterOutcome::FollowUp(questions) => {
                            json!({ "follow_up_needed": true, "questions": questions })
                        }
                    })
                }
            })
            .build(),
    );

    registry.register(
        ToolBuilder::new("generate_cover_letter_final")
            .description(
                "Generates the final personalized cover letter using the resume, job\n\
                 description, and the user's follow-up answers.",
            )
            .required("resume_text", ParamType::String)
            .required("job_description", ParamType::String)
            .required("follow_up_answers", ParamType::String)
            .returns(ParamType::String)
            .handler(move |args| {
                let llm = Arc::clone(&llm);
                let portfolio = portfolio_url.clone();
                async move {
                    let resume_text = required_str(&args, "resume_text")?;
                    let job_description = required_str(&args, "job_description")?;
                    let follow_up_answers = required_str(&args, "follow_up_answers")?;
                    let letter = generator::final_letter(
                        llm.as_ref(),
                        portfolio.as_deref(),
                        &resume_text,
                        &job_description,
                        &follow_up_answers,
                    )
                    .await?;
                    Ok(Value::String(letter))
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

    fn letter_args() -> ToolArgs {
        let mut args = ToolArgs::new();
        args.insert("resume_text".to_string(), json!("resume"));
        args.insert("job_description".to_string(), json!("role"));
        args
    }

    #[tokio::test]
    async fn initial_tool_wraps_a_finished_letter() {
        let mut registry = ToolRegistry::new();
        register_tools(
            &mut registry,
            Arc::new(ScriptedCompleter::single("Dear Hiring Manager,")),
            None,
        );
        let result = registry
            .execute("generate_cover_letter_initial", letter_args())
            .await
            .unwrap();
        assert_eq!(result, json!({"cover_letter": "Dear Hiring Manager,"}));
    }

    #[tokio::test]
    async fn initial_tool_surfaces_follow_up_questions() {
        let mut registry = ToolRegistry::new();
        register_tools(
            &mut registry,
            Arc::new(ScriptedCompleter::single(
                r#"FOLLOW-UP: ["Why this company?"]"#,
            )),
            None,
        );
        let result = registry
            .execute("generate_cover_letter_initial", letter_args())
            .await
            .unwrap();
        assert_eq!(result["follow_up_needed"], json!(true));
        assert_eq!(result["questions"], json!(["Why this company?"]));
    }

    #[tokio::test]
    async fn final_tool_returns_the_letter_text() {
        let mut registry = ToolRegistry::new();
        register_tools(
            &mut registry,
            Arc::new(ScriptedCompleter::single("Final letter.")),
            None,
        );
        let mut args = letter_args();
        args.insert("follow_up_answers".to_string(), json!("I love the mission."));
        let result = registry
            .execute("generate_cover_letter_final", args)
            .await
            .unwrap();
        assert_eq!(result, json!("Final letter."));
    }
}
