// All LLM prompt constants for the Resume module.

/// System prompt for resume optimization.
pub const OPTIMIZATION_SYSTEM: &str =
    "You are a helpful assistant that provides resume optimization suggestions.";

/// Optimization prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending.
pub const OPTIMIZATION_PROMPT_TEMPLATE: &str = r#"You are an expert in resume optimization and improving ATS compatibility.
The user has provided their current resume and a job description.
Provide clear, concise, and impactful suggestions to improve the resume.
Focus on:
- Identifying key keywords, phrases, and requirements from the job description.
- Recommending how to naturally incorporate these into the existing resume.
- Suggesting where existing projects, experiences, or skills can be reworded, emphasized, or reordered.
Do not invent any new experiences, skills, or projects.

Resume:
{resume_text}

Job Description:
{job_description}

Provide your suggestions:"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_declares_its_placeholders() {
        assert!(OPTIMIZATION_PROMPT_TEMPLATE.contains("{resume_text}"));
        assert!(OPTIMIZATION_PROMPT_TEMPLATE.contains("{job_description}"));
    }
}
