use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    /// URL prefix the generated tool endpoints are mounted under.
    pub tools_prefix: String,
    /// Portfolio link woven into generated cover letters, if the user has one.
    pub portfolio_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let tools_prefix =
            std::env::var("TOOLS_PREFIX").unwrap_or_else(|_| "/tools".to_string());
        ensure!(
            tools_prefix.starts_with('/') && tools_prefix.len() > 1,
            "TOOLS_PREFIX must start with '/' and not be empty"
        );

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            tools_prefix,
            portfolio_url: std::env::var("PORTFOLIO_URL").ok().filter(|v| !v.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
