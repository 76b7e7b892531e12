//! Environment-sourced configuration.
//!
//! Everything is read once at startup and passed by reference — there is no
//! ambient global lookup. Unknown environment keys are simply never read.

/// Runtime configuration for the verifier service.
///
/// Loaded from environment variables by [`Config::from_env`]. The API key may
/// legitimately be empty at startup (e.g. health-check-only deployments); the
/// provider refuses to make a call without it.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI-compatible API key. Empty means "not configured".
    pub openai_api_key: String,
    /// Base URL of the OpenAI-compatible endpoint (no trailing slash).
    pub openai_api_url: String,
    /// Model identifier sent with every completion request.
    pub llm_model_name: String,
    /// Deployment environment tag ("dev", "staging", "prod").
    pub env: String,
    /// Version tag stamped into decision metadata and logs.
    pub prompt_version: String,
    /// Optional LangSmith credential for external trace collection.
    pub langsmith_api_key: Option<String>,
    /// Optional LangSmith project name.
    pub langsmith_project: Option<String>,
}

const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_url: std::env::var("OPENAI_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string()),
            prompt_version: std::env::var("PROMPT_VERSION").unwrap_or_else(|_| "v1".to_string()),
            langsmith_api_key: std::env::var("LANGSMITH_API_KEY").ok(),
            langsmith_project: std::env::var("LANGSMITH_PROJECT").ok(),
        }
    }

    /// Whether a model credential is present.
    pub fn has_credential(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_api_url: DEFAULT_API_URL.to_string(),
            llm_model_name: DEFAULT_MODEL.to_string(),
            env: "dev".to_string(),
            prompt_version: "v1".to_string(),
            langsmith_api_key: None,
            langsmith_project: None,
        }
    }
}
