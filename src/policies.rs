//! Fixed business policies (POL-1..POL-8) and the citation whitelist.

/// Policy identifiers the model is allowed to cite, in canonical order.
pub const POLICY_IDS: [&str; 8] = [
    "POL-1", "POL-2", "POL-3", "POL-4", "POL-5", "POL-6", "POL-7", "POL-8",
];

/// Full text of the internal purchase policy, embedded verbatim in prompts.
pub const POLICY_TEXT: &str = "\
POL-1: Só compramos crédito de processos transitados em julgado e em fase de execução
       (execução definitiva ou cumprimento de sentença).

POL-2: É obrigatório existir valor de condenação informado de forma identificável
       (campo específico ou valor claramente indicado em documentos).

POL-3: Se o valor da condenação for menor que R$ 1.000,00, a empresa não compra o crédito.

POL-4: Processos na esfera trabalhista (por exemplo, Justiça do Trabalho) não são elegíveis
       para compra de crédito.

POL-5: Se houver óbito do autor sem habilitação em inventário (herdeiros/inventariante
       não habilitados), a empresa não compra o crédito.

POL-6: Se houver substabelecimento sem reserva de poderes (transferência total de poderes
       do advogado), a empresa não compra o crédito.

POL-7: Quando existirem, devem ser informados os honorários contratuais, periciais e
       sucumbenciais, ainda que isso não seja, por si só, motivo de rejeição.

POL-8: Se faltar documento essencial para aplicar a política (por exemplo, prova de trânsito
       em julgado), a decisão deve ser 'incomplete'.
";

/// Returns the policy snippets to inject into the user prompt.
///
/// Currently total-recall: the full policy text, verbatim. Kept as a function
/// so a relevance-based retriever can replace it without touching callers.
pub fn retrieve_policy_snippets() -> &'static str {
    POLICY_TEXT
}

/// Whether `id` is one of the eight known policy identifiers.
pub fn is_known_policy(id: &str) -> bool {
    POLICY_IDS.contains(&id)
}

/// Filter model-supplied citations down to known policy identifiers,
/// dropping duplicates while preserving first-seen order. Unknown values are
/// silently discarded, never an error.
pub fn sanitize_policy_citations<I, S>(citations: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = Vec::new();
    for citation in citations {
        let citation = citation.as_ref();
        if is_known_policy(citation) && !unique.iter().any(|c| c == citation) {
            unique.push(citation.to_string());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippets_cover_all_policies() {
        let text = retrieve_policy_snippets();
        for id in POLICY_IDS {
            assert!(text.contains(id), "policy text missing {id}");
        }
    }

    #[test]
    fn sanitize_drops_unknown_values() {
        let result = sanitize_policy_citations(["POL-1", "POL-99", "garbage", "POL-4"]);
        assert_eq!(result, vec!["POL-1", "POL-4"]);
    }

    #[test]
    fn sanitize_dedups_preserving_first_seen_order() {
        let result = sanitize_policy_citations(["POL-3", "POL-1", "POL-3", "POL-1", "POL-8"]);
        assert_eq!(result, vec!["POL-3", "POL-1", "POL-8"]);
    }

    #[test]
    fn sanitize_empty_input_yields_empty() {
        let result = sanitize_policy_citations(Vec::<String>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn known_policy_is_exact_match() {
        assert!(is_known_policy("POL-8"));
        assert!(!is_known_policy("pol-8"));
        assert!(!is_known_policy("POL-9"));
        assert!(!is_known_policy(" POL-1"));
    }
}
