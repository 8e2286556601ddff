//! # Registro de Implementações
//!
//! O [`Registry`] associa nomes a fábricas de implementações concretas, uma tabela por
//! capacidade. A partir de um [`PipelineConfig`] ele monta os [`Components`] que o
//! pipeline usa, sempre como trait objects.
//!
//! A verificação de conformidade acontece na construção: um nome configurado que não
//! tenha fábrica registrada falha com `Error::Unimplemented`, antes de qualquer texto
//! ser processado. Pedir a `Components` uma capacidade que não foi configurada falha
//! da mesma forma.
//!
//! Os parâmetros `S` e `P` fixam os tipos de saída dos analisadores de sentimento e
//! dos parsers registrados (por padrão `serde_json::Value`, que cobre tuplas, escores
//! e mapas).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use textkit_core::{PipelineConfig, Registry, Result};
//! use textkit_core::tokenizer::{GenericTokenizer, Tokenizer};
//!
//! struct Whitespace;
//! impl GenericTokenizer for Whitespace {
//!     fn tokenize(&self, text: &str) -> Result<Vec<String>> {
//!         Ok(text.split_whitespace().map(String::from).collect())
//!     }
//! }
//! impl Tokenizer for Whitespace {}
//!
//! let mut registry: Registry = Registry::new();
//! registry.register_tokenizer("whitespace", || Ok(Whitespace));
//!
//! let config = PipelineConfig::from_json_str(r#"{"tokenizer": "whitespace"}"#).unwrap();
//! let components = registry.build(&config).unwrap();
//! let tokens = components.tokenizer().unwrap().tokenize("a b").unwrap();
//! assert_eq!(tokens, vec!["a", "b"]);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{Capability, Error, Result};
use crate::np_extractor::NpExtractor;
use crate::parser::Parser;
use crate::sentiment::SentimentAnalyzer;
use crate::tagger::Tagger;
use crate::tokenizer::Tokenizer;

type Factory<T> = Box<dyn Fn() -> Result<T>>;

type DynAnalyzer<S> = Box<dyn SentimentAnalyzer<Output = S>>;
type DynParser<P> = Box<dyn Parser<Output = P>>;

/// Tabela de fábricas nomeadas, uma por capacidade.
pub struct Registry<S = serde_json::Value, P = serde_json::Value>
where
    S: 'static,
    P: 'static,
{
    taggers: BTreeMap<String, Factory<Box<dyn Tagger>>>,
    np_extractors: BTreeMap<String, Factory<Box<dyn NpExtractor>>>,
    tokenizers: BTreeMap<String, Factory<Box<dyn Tokenizer>>>,
    analyzers: BTreeMap<String, Factory<DynAnalyzer<S>>>,
    parsers: BTreeMap<String, Factory<DynParser<P>>>,
}

impl<S: 'static, P: 'static> Registry<S, P> {
    pub fn new() -> Self {
        Self {
            taggers: BTreeMap::new(),
            np_extractors: BTreeMap::new(),
            tokenizers: BTreeMap::new(),
            analyzers: BTreeMap::new(),
            parsers: BTreeMap::new(),
        }
    }

    pub fn register_tagger<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: Tagger + 'static,
        F: Fn() -> Result<T> + 'static,
    {
        self.taggers.insert(
            name.to_string(),
            Box::new(move || -> Result<Box<dyn Tagger>> { Ok(Box::new(factory()?)) }),
        );
        self
    }

    pub fn register_np_extractor<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: NpExtractor + 'static,
        F: Fn() -> Result<T> + 'static,
    {
        self.np_extractors.insert(
            name.to_string(),
            Box::new(move || -> Result<Box<dyn NpExtractor>> { Ok(Box::new(factory()?)) }),
        );
        self
    }

    pub fn register_tokenizer<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: Tokenizer + 'static,
        F: Fn() -> Result<T> + 'static,
    {
        self.tokenizers.insert(
            name.to_string(),
            Box::new(move || -> Result<Box<dyn Tokenizer>> { Ok(Box::new(factory()?)) }),
        );
        self
    }

    pub fn register_analyzer<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: SentimentAnalyzer<Output = S> + 'static,
        F: Fn() -> Result<T> + 'static,
    {
        self.analyzers.insert(
            name.to_string(),
            Box::new(move || -> Result<DynAnalyzer<S>> { Ok(Box::new(factory()?)) }),
        );
        self
    }

    pub fn register_parser<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: Parser<Output = P> + 'static,
        F: Fn() -> Result<T> + 'static,
    {
        self.parsers.insert(
            name.to_string(),
            Box::new(move || -> Result<DynParser<P>> { Ok(Box::new(factory()?)) }),
        );
        self
    }

    /// Nomes registrados para a capacidade, em ordem alfabética.
    pub fn names(&self, capability: Capability) -> Vec<&str> {
        match capability {
            Capability::Tagger => self.taggers.keys().map(String::as_str).collect(),
            Capability::NpExtractor => self.np_extractors.keys().map(String::as_str).collect(),
            Capability::Tokenizer => self.tokenizers.keys().map(String::as_str).collect(),
            Capability::SentimentAnalyzer => self.analyzers.keys().map(String::as_str).collect(),
            Capability::Parser => self.parsers.keys().map(String::as_str).collect(),
        }
    }

    /// Monta os componentes escolhidos pela configuração.
    ///
    /// Falha com `Error::Unimplemented` se algum nome configurado não estiver
    /// registrado, e propaga qualquer erro das fábricas.
    pub fn build(&self, config: &PipelineConfig) -> Result<Components<S, P>> {
        let components = Components {
            tagger: instantiate(&self.taggers, config, Capability::Tagger)?,
            np_extractor: instantiate(&self.np_extractors, config, Capability::NpExtractor)?,
            tokenizer: instantiate(&self.tokenizers, config, Capability::Tokenizer)?,
            analyzer: instantiate(&self.analyzers, config, Capability::SentimentAnalyzer)?,
            parser: instantiate(&self.parsers, config, Capability::Parser)?,
        };

        let configured: Vec<&str> = components.configured().iter().map(|c| c.name()).collect();
        info!(capabilities = ?configured, "componentes montados");
        Ok(components)
    }
}

impl<S: 'static, P: 'static> Default for Registry<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

fn instantiate<T>(
    factories: &BTreeMap<String, Factory<T>>,
    config: &PipelineConfig,
    capability: Capability,
) -> Result<Option<T>> {
    let Some(name) = config.name_for(capability) else {
        return Ok(None);
    };
    let factory = factories.get(name).ok_or_else(|| {
        Error::unimplemented(capability, format!("implementação '{}' não registrada", name))
    })?;
    debug!(%capability, name, "instanciando componente");
    factory().map(Some)
}

/// Implementações montadas para um pipeline.
pub struct Components<S = serde_json::Value, P = serde_json::Value>
where
    S: 'static,
    P: 'static,
{
    tagger: Option<Box<dyn Tagger>>,
    np_extractor: Option<Box<dyn NpExtractor>>,
    tokenizer: Option<Box<dyn Tokenizer>>,
    analyzer: Option<DynAnalyzer<S>>,
    parser: Option<DynParser<P>>,
}

impl<S: 'static, P: 'static> Components<S, P> {
    pub fn tagger(&self) -> Result<&dyn Tagger> {
        self.tagger
            .as_deref()
            .ok_or_else(|| missing(Capability::Tagger))
    }

    pub fn np_extractor(&self) -> Result<&dyn NpExtractor> {
        self.np_extractor
            .as_deref()
            .ok_or_else(|| missing(Capability::NpExtractor))
    }

    pub fn tokenizer(&self) -> Result<&dyn Tokenizer> {
        self.tokenizer
            .as_deref()
            .ok_or_else(|| missing(Capability::Tokenizer))
    }

    /// O analisador exige acesso mutável: o primeiro `analyze` altera o estado de treino.
    pub fn analyzer(&mut self) -> Result<&mut (dyn SentimentAnalyzer<Output = S> + 'static)> {
        self.analyzer
            .as_deref_mut()
            .ok_or_else(|| missing(Capability::SentimentAnalyzer))
    }

    pub fn parser(&self) -> Result<&dyn Parser<Output = P>> {
        self.parser
            .as_deref()
            .ok_or_else(|| missing(Capability::Parser))
    }

    /// Capacidades efetivamente montadas.
    pub fn configured(&self) -> Vec<Capability> {
        let present = [
            self.tagger.is_some(),
            self.np_extractor.is_some(),
            self.tokenizer.is_some(),
            self.analyzer.is_some(),
            self.parser.is_some(),
        ];
        Capability::all()
            .into_iter()
            .zip(present)
            .filter_map(|(cap, is_present)| is_present.then_some(cap))
            .collect()
    }
}

fn missing(capability: Capability) -> Error {
    Error::unimplemented(capability, "capacidade não configurada")
}
