//! HTTP-surface tests: a real ephemeral listener with a fake model provider.

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use veredicto::config::Config;
use veredicto::gateway::{build_router, AppState};
use veredicto::providers::{Completion, Provider, ProviderError};

struct FakeProvider {
    reply: serde_json::Value,
}

#[async_trait]
impl Provider for FakeProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<Completion, ProviderError> {
        Ok(Completion {
            raw: self.reply.clone(),
            latency_ms: 1.0,
            model_name: "fake-model".to_string(),
        })
    }
}

struct NoCredentialProvider;

#[async_trait]
impl Provider for NoCredentialProvider {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<Completion, ProviderError> {
        Err(ProviderError::MissingCredential)
    }
}

async fn spawn_app(provider: Arc<dyn Provider>) -> SocketAddr {
    let state = AppState {
        provider,
        config: Arc::new(Config::default()),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    addr
}

fn case_payload() -> serde_json::Value {
    serde_json::json!({
        "numeroProcesso": "0001234-56.2023.4.05.8100",
        "classe": "Cumprimento de Sentença",
        "orgaoJulgador": "Vara Federal",
        "ultimaDistribuicao": "2024-01-01T00:00:00Z",
        "assunto": "Benefício previdenciário",
        "segredoJustica": false,
        "justicaGratuita": true,
        "siglaTribunal": "TRF5",
        "esfera": "Federal",
        "documentos": [],
        "movimentos": []
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let addr = spawn_app(Arc::new(NoCredentialProvider)).await;

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn verify_returns_normalized_decision() {
    let addr = spawn_app(Arc::new(FakeProvider {
        reply: serde_json::json!({
            "numeroProcesso": "0001234-56.2023.4.05.8100",
            "decision": "approved",
            "rationale": "Tudo em ordem.",
            "policy_citations": ["POL-1", "POL-1", "POL-99"],
            "metadata": {}
        }),
    }))
    .await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/v1/process/verify"))
        .json(&case_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["numeroProcesso"], "0001234-56.2023.4.05.8100");
    assert_eq!(body["decision"], "approved");
    assert_eq!(body["policy_citations"], serde_json::json!(["POL-1"]));
    assert_eq!(body["metadata"]["model_name"], "fake-model");
    assert_eq!(body["metadata"]["prompt_version"], "v1");
    assert_eq!(body["metadata"]["latency_ms"], 1.0);
}

#[tokio::test]
async fn verify_core_failure_returns_500_with_detail() {
    let addr = spawn_app(Arc::new(NoCredentialProvider)).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/v1/process/verify"))
        .json(&case_payload())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn verify_rejects_malformed_body_before_core_runs() {
    let addr = spawn_app(Arc::new(NoCredentialProvider)).await;

    // Missing required fields — rejected by the extractor, never a 500.
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/v1/process/verify"))
        .json(&serde_json::json!({"numeroProcesso": "x"}))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}
