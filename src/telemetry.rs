//! Decision emission: one structured log line per completed verification.

use crate::decision::Decision;

/// Round a latency reading to two decimal places for log/metadata output.
pub fn round2(latency_ms: f64) -> f64 {
    (latency_ms * 100.0).round() / 100.0
}

/// Emit the per-verification decision record as a single JSON log line.
///
/// Best-effort only: this can never fail the calling verification.
pub fn log_decision(
    numero_processo: &str,
    decision: Decision,
    policy_citations: &[String],
    latency_ms: f64,
    prompt_version: &str,
) {
    let record = serde_json::json!({
        "event": "decision",
        "numeroProcesso": numero_processo,
        "decision": decision.as_str(),
        "policy_citations": policy_citations,
        "latency_ms": round2(latency_ms),
        "prompt_version": prompt_version,
    });
    tracing::info!(target: "veredicto::decision", "{record}");
}
