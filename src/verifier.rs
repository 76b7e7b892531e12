//! Verification orchestrator: prompt assembly, model call, normalization.
//!
//! The raw model reply is treated as an untrusted, untyped JSON document.
//! Every field of the final [`DecisionOutput`] goes through an explicit
//! coercion rule; nothing is deserialized directly into the output type.

use crate::config::Config;
use crate::decision::{Decision, DecisionOutput};
use crate::policies::{retrieve_policy_snippets, sanitize_policy_citations};
use crate::processo::ProcessoInput;
use crate::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::providers::Provider;
use crate::telemetry::{log_decision, round2};
use anyhow::{Context, Result};

/// Substituted when the model omits the rationale or returns it empty.
pub const FALLBACK_RATIONALE: &str = "A decisão retornada pelo modelo estava incompleta.";

/// Run one verification: build prompts, call the model, normalize the reply.
///
/// Any failure up to and including the model call propagates as a single
/// error — no partial results. After successful construction exactly one
/// decision log line is emitted; failure paths emit none.
pub async fn verify_process(
    processo: &ProcessoInput,
    provider: &dyn Provider,
    config: &Config,
) -> Result<DecisionOutput> {
    let process_json = processo
        .to_canonical_json()
        .context("falha ao serializar o processo")?;
    let user_prompt = build_user_prompt(&process_json, retrieve_policy_snippets());

    let completion = provider.complete(SYSTEM_PROMPT, &user_prompt).await?;
    let raw = completion.raw;

    let numero_processo = raw
        .get("numeroProcesso")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| processo.numero_processo.clone());

    // Out-of-range decision values coerce to incomplete, never to an error.
    let decision = raw
        .get("decision")
        .and_then(|v| v.as_str())
        .and_then(Decision::parse)
        .unwrap_or(Decision::Incomplete);

    let rationale = raw
        .get("rationale")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_RATIONALE.to_string());

    let policy_citations = raw
        .get("policy_citations")
        .and_then(|v| v.as_array())
        .map(|items| sanitize_policy_citations(items.iter().filter_map(|v| v.as_str())))
        .unwrap_or_default();

    let mut metadata = raw
        .get("metadata")
        .and_then(|v| v.as_object())
        .cloned()
        .unwrap_or_default();
    // Fill-if-absent: keys the model supplied are never overwritten.
    metadata
        .entry("model_name")
        .or_insert_with(|| completion.model_name.clone().into());
    metadata
        .entry("prompt_version")
        .or_insert_with(|| config.prompt_version.clone().into());
    metadata
        .entry("latency_ms")
        .or_insert_with(|| round2(completion.latency_ms).into());

    let output = DecisionOutput {
        numero_processo,
        decision,
        rationale,
        policy_citations,
        metadata,
    };

    log_decision(
        &output.numero_processo,
        output.decision,
        &output.policy_citations,
        completion.latency_ms,
        &config.prompt_version,
    );

    Ok(output)
}
