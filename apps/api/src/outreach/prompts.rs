// All LLM prompt constants for the Outreach module.
// Replace the {name}, {about_section}, and {job_posting} placeholders before sending.

/// Connection request prompt template.
pub const CONNECTION_PROMPT_TEMPLATE: &str = r#"You are an expert at writing short, personalized LinkedIn connection requests.
The user wants to connect with {name}. If there's an About section, mention it.
The message must be under 300 characters total.

About section: {about_section}

Write a concise, friendly LinkedIn connection request referencing their background.
Ensure it's under 300 characters."#;

/// Job inquiry prompt template. Emphasizes that the user has already applied.
pub const INQUIRY_PROMPT_TEMPLATE: &str = r#"You are an expert at writing short, personalized LinkedIn connection requests.
The user has already applied to a job at the person's company and wants to connect with {name}.

Requirements:
- Must remain under 300 characters total.
- Mention {name}'s background (from the About section) if available.
- State that the user has already applied for the job.
- Politely ask if they'd be open to a brief conversation.

About section: {about_section}
Job posting: {job_posting}

Write a concise, friendly LinkedIn connection request under 300 characters."#;
