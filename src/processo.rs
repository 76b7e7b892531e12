//! Case-record data model (input side).
//!
//! Wire field names follow the upstream court-data convention
//! (camelCase Portuguese, e.g. `numeroProcesso`); the structs keep idiomatic
//! snake_case internally. Records are immutable value objects — constructed
//! once per request and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A filed document, including its full extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documento {
    pub id: String,
    pub data_hora_juntada: DateTime<Utc>,
    pub nome: String,
    pub texto: String,
}

/// A docket movement entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movimento {
    pub data_hora: DateTime<Utc>,
    pub descricao: String,
}

/// Fee schedule attached to a case. All amounts optional (POL-7 asks for them
/// when they exist, but their absence is not by itself a rejection).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Honorarios {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contratuais: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periciais: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sucumbenciais: Option<f64>,
}

/// A lawsuit submitted for credit-purchase evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessoInput {
    pub numero_processo: String,
    pub classe: String,
    pub orgao_julgador: String,
    pub ultima_distribuicao: DateTime<Utc>,
    pub assunto: String,
    pub segredo_justica: bool,
    pub justica_gratuita: bool,
    pub sigla_tribunal: String,
    /// Jurisdiction sphere: "Federal", "Estadual", "Trabalhista", etc.
    pub esfera: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_causa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_condenacao: Option<f64>,

    pub documentos: Vec<Documento>,
    pub movimentos: Vec<Movimento>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorarios: Option<Honorarios>,
}

impl ProcessoInput {
    /// Canonical JSON text of the case: struct-declared field order, non-ASCII
    /// characters preserved as-is (serde_json never escapes them).
    pub fn to_canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
