//! Prompt construction for the policy-verification call.
//!
//! Both prompts are deterministic: identical inputs always produce identical
//! text. The business instructions are kept in Portuguese — they are domain
//! content shown to the model, not code.

use crate::policies::POLICY_TEXT;

/// Fixed, request-independent system instruction.
pub const SYSTEM_PROMPT: &str = "\
Você é um(a) especialista jurídico(a) e analista de crédito de uma empresa
que COMPRA créditos de processos judiciais contra a Fazenda Pública.

Sua responsabilidade é aplicar, de forma estrita, a política interna da empresa
(POL-1 a POL-8) para decidir se a empresa compra ou não o crédito de um processo,
ou se a análise fica incompleta por falta de informação essencial.

Você SEMPRE deve:
- Ler atentamente o JSON do processo fornecido.
- Considerar o conteúdo dos documentos e movimentos, buscando termos como:
  - trânsito em julgado;
  - fase de execução, cumprimento definitivo;
  - valores da condenação;
  - óbito do autor e habilitação;
  - substabelecimento sem reserva de poderes;
  - indícios de que se trata de processo trabalhista.
- Aplicar fielmente as regras POL-1 a POL-8 descritas no contexto.
- Responder ESTRITAMENTE com um JSON válido, no formato especificado, SEM QUALQUER TEXTO extra.
";

/// Build the per-request user prompt embedding the case JSON and policy text.
///
/// `extra_policy_snippets` is appended as its own block only when non-empty.
pub fn build_user_prompt(process_json: &str, extra_policy_snippets: &str) -> String {
    let extra_block = if extra_policy_snippets.is_empty() {
        String::new()
    } else {
        format!("\n\nTrechos adicionais da política:\n{extra_policy_snippets}")
    };

    format!(
        r#"Você receberá a seguir o JSON de um processo judicial no formato acordado.

Aplique EXATAMENTE as regras POL-1 a POL-8 a seguir (sem criar regras novas):

{POLICY_TEXT}
{extra_block}

Regras de decisão (DENTRO DA SUA LÓGICA):

- Se o processo NÃO estiver claramente transitado em julgado ou NÃO estiver em fase de
  execução/cumprimento definitivo, avalie se falta documento essencial:
    * Se for claramente inelegível pelas políticas → 'rejected' citando as políticas.
    * Se for impossível concluir por falta de documento indispensável → 'incomplete' citando POL-8
      e, se aplicável, outras políticas.

- Se NÃO HOUVER valor de condenação identificável nos dados (campo específico ou nos textos
  dos documentos), então:
    * decision = "incomplete"
    * cite POL-2 e POL-8.

- Se HOUVER valor de condenação identificado (< R$ 1.000,00):
    * decision = "rejected"
    * cite POL-3 (e outras se aplicáveis).

- Se a esfera ou o conteúdo indicarem que se trata de processo TRABALHISTA:
    * decision = "rejected"
    * cite POL-4.

- Se houver óbito do autor sem habilitação no inventário:
    * decision = "rejected"
    * cite POL-5.

- Se houver substabelecimento sem reserva de poderes:
    * decision = "rejected"
    * cite POL-6.

- Se faltar qualquer documento essencial para avaliar a política (por exemplo, não há certidão
  de trânsito em julgado quando isso é necessário):
    * decision = "incomplete"
    * cite POL-8 (e outras, se fizer sentido).

- Se estiver tudo em ordem (POL-1 e POL-2 satisfeitas, nenhuma condição de rejeição, documentação
  essencial presente):
    * decision = "approved"
    * cite as regras aplicáveis (ex.: ["POL-1","POL-2","POL-7"]).

FORMATO DE RESPOSTA OBRIGATÓRIO (NÃO QUEBRE ISSO):

Você DEVE responder ESTRITAMENTE com um JSON válido, sem texto extra, no formato:

{{
  "numeroProcesso": "<copie exatamente do JSON de entrada>",
  "decision": "approved" | "rejected" | "incomplete",
  "rationale": "<explicação em português claro, curta mas completa>",
  "policy_citations": ["POL-1", "POL-2"],
  "metadata": {{
    "model_name": "<nome do modelo LLM (se souber)>",
    "prompt_version": "v1"
  }}
}}

- NÃO inclua comentários.
- NÃO inclua texto antes ou depois do JSON.
- Se o JSON de entrada estiver malformado ou faltar campo essencial, responda com:
  decision = "incomplete",
  rationale explicando claramente o erro (por exemplo, "JSON inválido" ou "campo X ausente"),
  policy_citations contendo, se aplicável, ["POL-8"].

A seguir está o JSON do processo a ser analisado:

{process_json}"#
    )
    .trim()
    .to_string()
}
