// Shared prompt constants. Each module that calls the LLM keeps its own
// prompts.rs alongside it; this file holds the cross-cutting fragments.

/// Base system prompt for conversational generation tasks.
pub const HELPFUL_ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
