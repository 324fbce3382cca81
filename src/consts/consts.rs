use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

// Endpoints
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const RECORDS_PATH: &str = "/api/dados";
pub const MARK_FOUND_PATH: &str = "/marcar_encontrada";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// DOM element ids the page shell provides
pub const RESULTS_ELEMENT_ID: &str = "resultados";
pub const SEARCH_FIELD_ELEMENT_ID: &str = "campoBusca";

// Status literal that selects the "missing" branch, compared case-insensitively
pub const MISSING_STATUS: &str = "DESAPARECIDO";

// Display sentinels
pub const UNKNOWN_DATE: &str = "Data Desconhecida";
pub const NOT_INFORMED: &str = "Não Informado";
pub const NOT_AVAILABLE: &str = "N/A";

// User-facing messages
pub const LOADING_MESSAGE: &str = "Carregando dados...";
pub const EMPTY_RESULTS_MESSAGE: &str = "Nenhuma pessoa desaparecida cadastrada ou nenhum resultado encontrado com os filtros aplicados.";
pub const LOAD_FAILED_HEADLINE: &str = "Não foi possível carregar os dados.";
pub const LOAD_FAILED_HINT: &str = "Verifique se o servidor da API está rodando e se o endereço configurado está correto.";
pub const TECHNICAL_DETAIL_PREFIX: &str = "Detalhe técnico:";
pub const MARK_FOUND_BUTTON_LABEL: &str = "Marcar como Encontrada";
pub const FOUND_CONFIRMATION: &str = "✅ PESSOA ENCONTRADA";
pub const MARK_FOUND_PROMPT: &str = "Tem certeza que deseja marcar esta pessoa como ENCONTRADA?";
pub const MARK_FOUND_SUCCESS: &str = "Pessoa marcada como ENCONTRADA com sucesso!";
pub const MARK_FOUND_COMMUNICATION_FAILURE: &str = "Falha na comunicação com o servidor. Verifique os logs para detalhes.";
pub const CONFIRMATION_UNAVAILABLE: &str = "Não foi possível pedir confirmação no terminal, nada foi alterado. Use `mark-found <ID> --yes` para confirmar sem pergunta.";
