// All LLM prompt constants for the Letters module.
// Replace {resume_text}, {job_description}, {follow_up_answers}, and
// {portfolio_instruction} before sending.

/// System prompt for the initial call, which may answer with questions.
pub const INITIAL_SYSTEM: &str =
    "You are a helpful assistant that generates cover letters or follow-up questions.";

/// System prompt for the final call.
pub const FINAL_SYSTEM: &str =
    "You are a helpful assistant that writes personalized cover letters.";

/// Initial prompt: decide whether there is enough context, and either write
/// the letter or ask. The parser keys on the `FOLLOW-UP:` marker.
pub const INITIAL_PROMPT_TEMPLATE: &str = r#"You are an expert cover letter writer. Given the resume and job description below, decide whether all necessary context for writing a personalized cover letter is provided.
Necessary context includes:
- Why the user is interested in this company/role.
- The user's tone preference (e.g., professional, friendly, passionate).
- Specific projects or achievements to emphasize.

If sufficient context is provided, output the cover letter in plain text (max 1 page). {portfolio_instruction}
If any critical context is missing, output exactly: "FOLLOW-UP:" followed by a JSON array of follow-up questions.
Do not include any extra text.

Resume:
{resume_text}

Job Description:
{job_description}

Respond as described."#;

/// Final prompt: fold the follow-up answers into a finished letter.
pub const FINAL_PROMPT_TEMPLATE: &str = r#"You are an expert cover letter writer. Using the resume, job description, and additional context provided below,
generate a personalized, engaging cover letter (max 1 page) that:
- Highlights relevant skills, achievements, and projects.
- Aligns with the company's mission, values, and goals.
- Showcases why the user is excited about the role.
- Reflects the user's personality and tone based on the additional context.
{portfolio_instruction}

Resume:
{resume_text}

Job Description:
{job_description}

Additional Context (follow-up answers):
{follow_up_answers}

Generate the cover letter accordingly."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_declare_their_placeholders() {
        for template in [INITIAL_PROMPT_TEMPLATE, FINAL_PROMPT_TEMPLATE] {
            assert!(template.contains("{resume_text}"));
            assert!(template.contains("{job_description}"));
            assert!(template.contains("{portfolio_instruction}"));
        }
        assert!(FINAL_PROMPT_TEMPLATE.contains("{follow_up_answers}"));
        assert!(INITIAL_PROMPT_TEMPLATE.contains("FOLLOW-UP:"));
    }
}
