//! Outreach message generation with a hard character budget.

use crate::errors::AppError;
use crate::llm_client::prompts::HELPFUL_ASSISTANT_SYSTEM;
use crate::llm_client::Completer;
use crate::outreach::prompts::{CONNECTION_PROMPT_TEMPLATE, INQUIRY_PROMPT_TEMPLATE};

/// LinkedIn caps connection notes at 300 characters; generated messages are
/// clamped to this even when the model overshoots.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Generates a LinkedIn connection request for `name`.
pub async fn connection_request(
    llm: &dyn Completer,
    name: &str,
    about_section: &str,
) -> Result<String, AppError> {
    let prompt = CONNECTION_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{about_section}", about_section);
    let message = llm
        .complete(HELPFUL_ASSISTANT_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("connection request generation failed: {e}")))?;
    Ok(clamp_to_limit(&message))
}

/// Generates a job inquiry message: the user has already applied and wants a
/// brief conversation.
pub async fn job_inquiry(
    llm: &dyn Completer,
    name: &str,
    about_section: &str,
    job_posting: &str,
) -> Result<String, AppError> {
    let prompt = INQUIRY_PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{about_section}", about_section)
        .replace("{job_posting}", job_posting);
    let message = llm
        .complete(HELPFUL_ASSISTANT_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("job inquiry generation failed: {e}")))?;
    Ok(clamp_to_limit(&message))
}

/// Truncates to `MAX_MESSAGE_CHARS` characters and trims trailing whitespace
/// left by the cut.
pub fn clamp_to_limit(message: &str) -> String {
    let message = message.trim();
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    message
        .chars()
        .take(MAX_MESSAGE_CHARS)
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{FailingCompleter, ScriptedCompleter};

    #[test]
    fn short_messages_pass_through_trimmed() {
        assert_eq!(clamp_to_limit("  Hi Alice!  "), "Hi Alice!");
    }

    #[test]
    fn long_messages_are_cut_to_the_character_budget() {
        let long = "word ".repeat(100);
        let clamped = clamp_to_limit(&long);
        assert!(clamped.chars().count() <= MAX_MESSAGE_CHARS);
        assert!(!clamped.ends_with(' '));
    }

    #[test]
    fn multibyte_messages_are_cut_on_character_boundaries() {
        let long = "héllo wörld ".repeat(40);
        let clamped = clamp_to_limit(&long);
        assert!(clamped.chars().count() <= MAX_MESSAGE_CHARS);
    }

    #[tokio::test]
    async fn connection_request_substitutes_the_person_into_the_prompt() {
        let llm = ScriptedCompleter::single("Hi Alice!");
        let message = connection_request(&llm, "Alice", "Works on ML infra.")
            .await
            .unwrap();
        assert_eq!(message, "Hi Alice!");
        let prompts = llm.prompts();
        assert!(prompts[0].contains("connect with Alice"));
        assert!(prompts[0].contains("Works on ML infra."));
    }

    #[tokio::test]
    async fn job_inquiry_includes_the_posting() {
        let llm = ScriptedCompleter::single("Hi Bob!");
        let message = job_inquiry(&llm, "Bob", "", "Senior Rust Engineer at Tech Corp")
            .await
            .unwrap();
        assert_eq!(message, "Hi Bob!");
        assert!(llm.prompts()[0].contains("Senior Rust Engineer at Tech Corp"));
    }

    #[tokio::test]
    async fn overlong_completions_are_clamped() {
        let llm = ScriptedCompleter::single(&"x".repeat(400));
        let message = connection_request(&llm, "Alice", "").await.unwrap();
        assert_eq!(message.chars().count(), MAX_MESSAGE_CHARS);
    }

    #[tokio::test]
    async fn llm_failures_surface_as_llm_errors() {
        let err = connection_request(&FailingCompleter, "Alice", "")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
