//! Decision data model (output side).

use serde::{Deserialize, Serialize};

/// Final verdict on a credit purchase.
///
/// This is a closed enum: the output type cannot carry an out-of-range value.
/// Raw model strings enter exclusively through [`Decision::parse`], which
/// returns `None` for anything outside the three allowed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
    Incomplete,
}

impl Decision {
    /// Parse a raw model-supplied decision string. Unknown values yield
    /// `None`; the orchestrator coerces those to [`Decision::Incomplete`].
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "incomplete" => Some(Self::Incomplete),
            _ => None,
        }
    }

    /// Wire representation ("approved" / "rejected" / "incomplete").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured verdict returned to the caller.
///
/// Built only by the orchestrator after normalizing the raw model reply:
/// citations are whitelisted and deduplicated, and `metadata` is guaranteed
/// to carry `model_name`, `prompt_version` and `latency_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOutput {
    #[serde(rename = "numeroProcesso")]
    pub numero_processo: String,
    pub decision: Decision,
    pub rationale: String,
    pub policy_citations: Vec<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_allowed_values() {
        assert_eq!(Decision::parse("approved"), Some(Decision::Approved));
        assert_eq!(Decision::parse("rejected"), Some(Decision::Rejected));
        assert_eq!(Decision::parse("incomplete"), Some(Decision::Incomplete));
        assert_eq!(Decision::parse("foo"), None);
        assert_eq!(Decision::parse("Approved"), None);
        assert_eq!(Decision::parse(""), None);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Decision::Incomplete).unwrap(),
            "\"incomplete\""
        );
    }

    #[test]
    fn output_uses_wire_field_names() {
        let output = DecisionOutput {
            numero_processo: "0001234-56.2023.4.05.8100".to_string(),
            decision: Decision::Approved,
            rationale: "Tudo em ordem.".to_string(),
            policy_citations: vec!["POL-1".to_string()],
            metadata: serde_json::Map::new(),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["numeroProcesso"], "0001234-56.2023.4.05.8100");
        assert_eq!(value["decision"], "approved");
        assert_eq!(value["policy_citations"][0], "POL-1");
    }
}
