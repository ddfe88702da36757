//! Cover letter generation and the follow-up question protocol.
//!
//! The initial call asks the model to either write the letter or signal
//! missing context with a leading `FOLLOW-UP:` marker followed by a JSON
//! array of questions. A marker with a malformed array falls back to the
//! stock question set rather than failing the request.

use crate::errors::AppError;
use crate::letters::prompts::{
    FINAL_PROMPT_TEMPLATE, FINAL_SYSTEM, INITIAL_PROMPT_TEMPLATE, INITIAL_SYSTEM,
};
use crate::llm_client::Completer;

const FOLLOW_UP_MARKER: &str = "FOLLOW-UP:";

/// Questions used when the model flags missing context but its question
/// array cannot be parsed.
pub const FALLBACK_QUESTIONS: [&str; 4] = [
    "What draws you to this company or role personally?",
    "Are there any projects from your resume you'd like to emphasize more?",
    "What tone do you prefer: professional, friendly, or passionate?",
    "Are there any achievements or skills you'd like highlighted more?",
];

/// Outcome of the initial cover-letter call.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverLetterOutcome {
    Letter(String),
    FollowUp(Vec<String>),
}

/// First pass: either a finished letter or follow-up questions.
pub async fn initial_letter(
    llm: &dyn Completer,
    portfolio_url: Option<&str>,
    resume_text: &str,
    job_description: &str,
) -> Result<CoverLetterOutcome, AppError> {
    let prompt = INITIAL_PROMPT_TEMPLATE
        .replace("{portfolio_instruction}", &portfolio_instruction(portfolio_url))
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);
    let output = llm
        .complete(INITIAL_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("cover letter generation failed: {e}")))?;
    Ok(parse_outcome(&output))
}

/// Second pass: fold the user's follow-up answers into the final letter.
pub async fn final_letter(
    llm: &dyn Completer,
    portfolio_url: Option<&str>,
    resume_text: &str,
    job_description: &str,
    follow_up_answers: &str,
) -> Result<String, AppError> {
    let prompt = FINAL_PROMPT_TEMPLATE
        .replace("{portfolio_instruction}", &portfolio_instruction(portfolio_url))
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
        .replace("{follow_up_answers}", follow_up_answers);
    llm.complete(FINAL_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("cover letter generation failed: {e}")))
}

/// Classifies the model's output: a `FOLLOW-UP:` marker means questions,
/// anything else is the letter itself.
pub fn parse_outcome(output: &str) -> CoverLetterOutcome {
    let output = output.trim();
    match output.strip_prefix(FOLLOW_UP_MARKER) {
        Some(rest) => match serde_json::from_str::<Vec<String>>(rest.trim()) {
            Ok(questions) if !questions.is_empty() => CoverLetterOutcome::FollowUp(questions),
            _ => CoverLetterOutcome::FollowUp(
                FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            ),
        },
        None => CoverLetterOutcome::Letter(output.to_string()),
    }
}

fn portfolio_instruction(url: Option<&str>) -> String {
    url.map(|u| format!("Include the portfolio link: {u}."))
        .unwrap_or_default()
}
