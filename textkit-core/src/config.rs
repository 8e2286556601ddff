//! # Configuração do Pipeline
//!
//! Seleciona, por nome, qual implementação concreta atende cada capacidade. A escolha
//! acontece em tempo de configuração; o código do pipeline nunca conhece o tipo
//! concreto.
//!
//! ```json
//! {
//!   "tokenizer": "whitespace",
//!   "tagger": "lexicon",
//!   "sentiment_analyzer": "polarity"
//! }
//! ```
//!
//! As chaves são os nomes de [`Capability::name`]; `"analyzer"` também é aceito para
//! o analisador de sentimento.
//!
//! Todos os campos são opcionais: uma capacidade sem nome simplesmente não é montada.
//! Campos desconhecidos são rejeitados para que erros de digitação não passem em
//! silêncio.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Capability, Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub tagger: Option<String>,
    pub np_extractor: Option<String>,
    pub tokenizer: Option<String>,
    #[serde(rename = "sentiment_analyzer", alias = "analyzer")]
    pub analyzer: Option<String>,
    pub parser: Option<String>,
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lê a configuração de um arquivo JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Nome da implementação escolhida para a capacidade (se houver)
    pub fn name_for(&self, capability: Capability) -> Option<&str> {
        let slot = match capability {
            Capability::Tagger => &self.tagger,
            Capability::NpExtractor => &self.np_extractor,
            Capability::Tokenizer => &self.tokenizer,
            Capability::SentimentAnalyzer => &self.analyzer,
            Capability::Parser => &self.parser,
        };
        slot.as_deref()
    }

    /// Define a implementação de uma capacidade (estilo builder).
    pub fn with(mut self, capability: Capability, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match capability {
            Capability::Tagger => self.tagger = name,
            Capability::NpExtractor => self.np_extractor = name,
            Capability::Tokenizer => self.tokenizer = name,
            Capability::SentimentAnalyzer => self.analyzer = name,
            Capability::Parser => self.parser = name,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_partial_json() {
        let config = PipelineConfig::from_json_str(r#"{"tokenizer": "whitespace"}"#).unwrap();
        assert_eq!(config.name_for(Capability::Tokenizer), Some("whitespace"));
        assert_eq!(config.name_for(Capability::Tagger), None);
    }

    #[test]
    fn test_config_empty_json() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let err = PipelineConfig::from_json_str(r#"{"tagerr": "lexicon"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_builder_roundtrip() {
        let config = PipelineConfig::default()
            .with(Capability::SentimentAnalyzer, "polarity")
            .with(Capability::Parser, "chunk");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), config);
        assert_eq!(config.analyzer.as_deref(), Some("polarity"));
    }

    #[test]
    fn test_config_keys_are_capability_names() {
        for capability in Capability::all() {
            let json = format!(r#"{{"{}": "impl"}}"#, capability.name());
            let config = PipelineConfig::from_json_str(&json).unwrap();
            assert_eq!(config.name_for(capability), Some("impl"));
        }

        let legacy = PipelineConfig::from_json_str(r#"{"analyzer": "polarity"}"#).unwrap();
        assert_eq!(legacy.name_for(Capability::SentimentAnalyzer), Some("polarity"));
    }

    #[test]
    fn test_config_from_path() {
        let file = format!("textkit-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, r#"{"parser": "chunk"}"#).unwrap();
        let config = PipelineConfig::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.name_for(Capability::Parser), Some("chunk"));

        let missing = PipelineConfig::from_path(path.with_extension("absent"));
        assert!(matches!(missing, Err(Error::Config(_))));
    }
}
