//! # Erros dos Contratos
//!
//! Todas as operações das interfaces retornam [`Result`]. Nenhum módulo deste crate
//! recupera falhas localmente: o erro chega intacto a quem chamou, e cabe ao pipeline
//! (ou à CLI) decidir como apresentá-lo.
//!
//! | Variante          | Quando ocorre                                                        |
//! |-------------------|----------------------------------------------------------------------|
//! | `Unimplemented`   | Capacidade pedida sem implementação registrada/configurada           |
//! | `InvalidInput`    | Texto malformado ou de tipo errado (ex: bytes que não são UTF-8)     |
//! | `Training`        | Falha no passo de treino de um analisador de sentimento              |
//! | `Component`       | Falha específica de uma implementação concreta                       |
//! | `Config`          | Configuração do pipeline ilegível ou malformada                      |

use serde::{Deserialize, Serialize};

/// As cinco capacidades que um componente pode oferecer ao pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Etiquetagem morfossintática (POS tagging).
    Tagger,
    /// Extração de sintagmas nominais.
    NpExtractor,
    /// Tokenização (eager e lazy).
    Tokenizer,
    /// Análise de sentimento com treino preguiçoso.
    SentimentAnalyzer,
    /// Análise sintática.
    Parser,
}

impl Capability {
    /// Nome da capacidade (o mesmo usado na configuração JSON)
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Tagger => "tagger",
            Capability::NpExtractor => "np_extractor",
            Capability::Tokenizer => "tokenizer",
            Capability::SentimentAnalyzer => "sentiment_analyzer",
            Capability::Parser => "parser",
        }
    }

    /// Todas as capacidades em ordem (para iteração)
    pub fn all() -> [Capability; 5] {
        [
            Capability::Tagger,
            Capability::NpExtractor,
            Capability::Tokenizer,
            Capability::SentimentAnalyzer,
            Capability::Parser,
        ]
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Erro tipado retornado por qualquer operação dos contratos.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A capacidade (ou um método dela) não tem implementação disponível.
    #[error("{capability} sem implementação: {method}")]
    Unimplemented {
        capability: Capability,
        method: String,
    },

    /// Entrada malformada ou de tipo inesperado.
    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    /// O passo de treino falhou; o analisador continua `Untrained`.
    #[error("falha no treino: {0}")]
    Training(String),

    /// Falha reportada por uma implementação concreta.
    #[error("componente '{name}' falhou: {message}")]
    Component { name: String, message: String },

    /// Configuração do pipeline ilegível ou malformada.
    #[error("configuração inválida: {0}")]
    Config(String),
}

impl Error {
    pub fn unimplemented(capability: Capability, method: impl Into<String>) -> Self {
        Error::Unimplemented {
            capability,
            method: method.into(),
        }
    }

    pub fn invalid_input(msg: impl std::fmt::Display) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    pub fn training(msg: impl std::fmt::Display) -> Self {
        Error::Training(msg.to_string())
    }

    pub fn component(name: impl Into<String>, msg: impl std::fmt::Display) -> Self {
        Error::Component {
            name: name.into(),
            message: msg.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Alias usado em todo o crate.
pub type Result<T> = std::result::Result<T, Error>;
