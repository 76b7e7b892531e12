//! Axum-based HTTP surface for the verifier.
//!
//! Two routes: `GET /health` and `POST /v1/process/verify`. Malformed request
//! bodies are rejected by the `Json` extractor before the core runs; core
//! failures surface as 500 with a `detail` message.

use crate::config::Config;
use crate::processo::ProcessoInput;
use crate::providers::{OpenAiProvider, Provider};
use crate::verifier::verify_process;
use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (1 MiB) — case records carry full document text.
pub const MAX_BODY_SIZE: usize = 1_048_576;
/// Request timeout; bounds the single awaited model call per request.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Shared state for all axum handlers. Read-only after startup; requests are
/// otherwise stateless and independent.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn Provider>,
    pub config: Arc<Config>,
}

/// Build the application router over the given state.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(handle_health))
        .route("/v1/process/verify", post(handle_verify))
        .with_state(state)
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}

/// Run the HTTP gateway until the process is stopped.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let display_addr = listener.local_addr()?;

    if let Some(project) = config.langsmith_project.as_deref() {
        tracing::debug!(project, "LangSmith project configured");
    }

    let provider: Arc<dyn Provider> = Arc::new(OpenAiProvider::new(
        &config.openai_api_key,
        &config.openai_api_url,
        &config.llm_model_name,
    ));
    let state = AppState {
        provider,
        config: Arc::new(config),
    };

    tracing::info!(%display_addr, "verifier gateway listening");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// GET /health — liveness only, no secrets leaked.
async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// POST /v1/process/verify — run one verification.
async fn handle_verify(
    State(state): State<AppState>,
    Json(processo): Json<ProcessoInput>,
) -> impl IntoResponse {
    match verify_process(&processo, state.provider.as_ref(), &state.config).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => {
            tracing::error!(
                numero_processo = %processo.numero_processo,
                "verification failed: {e:#}"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"detail": e.to_string()})),
            )
                .into_response()
        }
    }
}
