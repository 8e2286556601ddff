//! # textkit-core — Contratos de Extensão do Toolkit de Análise de Texto
//!
//! Este crate define as interfaces que permitem plugar algoritmos intercambiáveis num
//! pipeline de processamento de texto. O pipeline (e quem o chama) depende apenas das
//! assinaturas; qual algoritmo concreto está por trás (regras, estatístico, modelo
//! treinado externamente) é decidido em tempo de configuração.
//!
//! ## Capacidades
//!
//! | Trait                 | Operação                 | Resultado                          |
//! |-----------------------|--------------------------|------------------------------------|
//! | [`Tagger`]            | `tag(text, tokenize)`    | `Vec<TaggedWord>` (palavra, tag)   |
//! | [`NpExtractor`]       | `extract(text)`          | `Vec<String>` (sintagmas nominais) |
//! | [`Tokenizer`]         | `tokenize` / `itokenize` | `Vec<String>` / [`TokenStream`]    |
//! | [`SentimentAnalyzer`] | `analyze(text)`          | `Output` do analisador             |
//! | [`Parser`]            | `parse(input)`           | `Output` do parser                 |
//!
//! As cinco capacidades são independentes entre si. Cada implementação é dona
//! exclusiva do próprio estado; o único estado mutável previsto pelo contrato é o
//! estado de treino dos analisadores de sentimento ([`sentiment::TrainingGate`]).
//!
//! ## Módulos Principais
//!
//! - [`tokenizer`], [`tagger`], [`np_extractor`], [`sentiment`], [`parser`]: os contratos.
//! - [`config`] e [`registry`]: seleção das implementações por nome.
//! - [`conformance`]: verificações em tempo de execução das garantias dos contratos.
//! - [`error`]: o tipo de erro comum.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use textkit_core::{Result, TaggedWord, Tagger};
//!
//! struct Fixed;
//!
//! impl Tagger for Fixed {
//!     fn tag(&self, text: &str, _tokenize: bool) -> Result<Vec<TaggedWord>> {
//!         Ok(text
//!             .split_whitespace()
//!             .map(|w| TaggedWord::new(w, if w == "run" { "VERB" } else { "ADV" }))
//!             .collect())
//!     }
//! }
//!
//! let tagged = Fixed.tag("run fast", true).unwrap();
//! assert_eq!(tagged[0].to_string(), "run/VERB");
//! ```

pub mod config;
pub mod conformance;
pub mod error;
pub mod np_extractor;
pub mod parser;
pub mod registry;
pub mod sentiment;
pub mod tagger;
pub mod tokenizer;

#[cfg(test)]
mod test_support;

pub use config::PipelineConfig;
pub use error::{Capability, Error, Result};
pub use np_extractor::NpExtractor;
pub use parser::{ParseInput, Parser};
pub use registry::{Components, Registry};
pub use sentiment::{AnalyzerKind, SentimentAnalyzer, TrainingGate, TrainingState};
pub use tagger::{TaggedWord, Tagger};
pub use tokenizer::{GenericTokenizer, TokenSpan, TokenStream, Tokenizer};
