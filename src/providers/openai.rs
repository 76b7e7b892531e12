//! OpenAI-compatible chat-completions provider.

use super::{Completion, Provider, ProviderError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Maximum characters of raw reply content echoed into a parse error.
const ERROR_SNIPPET_CHARS: usize = 200;

/// Provider backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// `base_url` is the API root without a trailing slash, e.g.
    /// `https://api.openai.com/v1`.
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Completion, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingCredential);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            // Maximal determinism: the decision should depend on the case,
            // not on sampling.
            temperature: 0.0,
        };

        let start = Instant::now();
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body: truncate_chars(&body, ERROR_SNIPPET_CHARS),
            });
        }

        let reply: ChatResponse = response.json().await?;
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyReply)?;

        let raw: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ProviderError::NonJsonReply {
                detail: e.to_string(),
                snippet: truncate_chars(&content, ERROR_SNIPPET_CHARS),
            })?;

        Ok(Completion {
            raw,
            latency_ms,
            model_name: self.model.clone(),
        })
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
