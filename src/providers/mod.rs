//! Model gateway: the single boundary to the external reasoning engine.
//!
//! The orchestrator only ever sees the [`Provider`] trait, so tests can
//! substitute a deterministic fake. The real implementation speaks the
//! OpenAI-compatible chat-completions protocol over `reqwest`.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;

/// Result of one completion call: the decoded reply, the wall-clock latency
/// of the external call, and the model identifier that served it.
///
/// No schema validation happens at this layer — the reply is an untyped JSON
/// document; normalization is the orchestrator's job.
#[derive(Debug, Clone)]
pub struct Completion {
    pub raw: serde_json::Value,
    pub latency_ms: f64,
    pub model_name: String,
}

/// Failure taxonomy for the model gateway.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No credential configured. Returned before any network call.
    #[error("OPENAI_API_KEY não configurada. Defina a variável de ambiente antes de chamar o verificador.")]
    MissingCredential,

    /// Transport-level failure (connection, TLS, timeout).
    #[error("falha na chamada ao LLM: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("LLM API retornou status {status}: {body}")]
    Api { status: u16, body: String },

    /// The reply carried no message content.
    #[error("LLM retornou conteúdo vazio")]
    EmptyReply,

    /// The reply content did not decode as JSON. `snippet` holds the first
    /// 200 characters of the raw content for diagnosability.
    #[error("LLM retornou conteúdo não-JSON: {detail}: {snippet}")]
    NonJsonReply { detail: String, snippet: String },
}

/// Capability-typed collaborator issuing the single request/response call to
/// the external model. One call per verification; no retries, no caching.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Completion, ProviderError>;
}
