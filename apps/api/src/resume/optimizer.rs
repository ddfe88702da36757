//! Resume optimization suggestion generation.

use crate::errors::AppError;
use crate::llm_client::Completer;
use crate::resume::prompts::{OPTIMIZATION_PROMPT_TEMPLATE, OPTIMIZATION_SYSTEM};

/// Generates optimization suggestions for `resume_text` against a job
/// description. The prompt forbids fabricating new experience.
pub async fn optimization_suggestions(
    llm: &dyn Completer,
    resume_text: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let prompt = OPTIMIZATION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);
    llm.complete(OPTIMIZATION_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("resume optimization failed: {e}")))
}
