//! # Verificações de Conformidade
//!
//! O compilador garante que uma implementação tem os métodos exigidos; estas funções
//! verificam, em tempo de execução, as garantias que a assinatura sozinha não expressa.
//! Autores de implementações concretas podem chamá-las nos próprios testes:
//!
//! ```rust,ignore
//! #[test]
//! fn meu_tokenizador_e_conforme() {
//!     conformance::check_tokenizer(&MeuTokenizador::new(), &["Olá, mundo.", ""]).unwrap();
//! }
//! ```
//!
//! | Função                      | Propriedades verificadas                                     |
//! |-----------------------------|--------------------------------------------------------------|
//! | `check_tokenizer`           | lazy == eager, vazio → vazio, determinismo, spans alinhados  |
//! | `check_tagger`              | palavras etiquetadas seguem a ordem do texto                 |
//! | `check_np_extractor`        | vazio → vazio, determinismo                                  |
//! | `check_sentiment_lifecycle` | treino no primeiro uso, estado final `Trained`, idempotência |
//! | `check_parser`              | texto e bytes equivalentes produzem o mesmo resultado        |

use tracing::warn;

use crate::error::{Capability, Error};
use crate::np_extractor::NpExtractor;
use crate::parser::{ParseInput, Parser};
use crate::sentiment::{SentimentAnalyzer, TrainingState};
use crate::tagger::Tagger;
use crate::tokenizer::Tokenizer;

/// Uma garantia do contrato que a implementação não cumpriu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{component} ({capability}) viola '{property}': {detail}")]
pub struct Violation {
    pub capability: Capability,
    pub component: String,
    pub property: &'static str,
    pub detail: String,
}

fn violation(
    capability: Capability,
    component: &str,
    property: &'static str,
    detail: impl Into<String>,
) -> Violation {
    let v = Violation {
        capability,
        component: component.to_string(),
        property,
        detail: detail.into(),
    };
    warn!(%capability, component, property, detail = %v.detail, "violação de contrato");
    v
}

fn failed(
    capability: Capability,
    component: &str,
    property: &'static str,
    err: Error,
) -> Violation {
    violation(capability, component, property, format!("operação falhou: {}", err))
}

/// Verifica um tokenizador contra as amostras (o texto vazio é sempre incluído).
pub fn check_tokenizer<T>(tokenizer: &T, samples: &[&str]) -> Result<(), Violation>
where
    T: Tokenizer + ?Sized,
{
    let cap = Capability::Tokenizer;
    let name = tokenizer.name();

    for &text in std::iter::once(&"").chain(samples) {
        let eager = tokenizer
            .tokenize(text)
            .map_err(|e| failed(cap, name, "tokenize", e))?;

        if text.is_empty() && !eager.is_empty() {
            return Err(violation(cap, name, "empty_input", format!("{:?}", eager)));
        }

        let again = tokenizer
            .tokenize(text)
            .map_err(|e| failed(cap, name, "deterministic", e))?;
        if again != eager {
            let detail = format!("{:?} != {:?}", eager, again);
            return Err(violation(cap, name, "deterministic", detail));
        }

        let lazy: Vec<String> = tokenizer
            .itokenize(text)
            .map_err(|e| failed(cap, name, "lazy_equals_eager", e))?
            .collect();
        if lazy != eager {
            return Err(violation(
                cap,
                name,
                "lazy_equals_eager",
                format!("itokenize {:?} != tokenize {:?}", lazy, eager),
            ));
        }

        let spans = tokenizer
            .span_tokenize(text)
            .map_err(|e| failed(cap, name, "span_alignment", e))?;
        for span in &spans {
            if text.get(span.start..span.end) != Some(span.text.as_str()) {
                return Err(violation(
                    cap,
                    name,
                    "span_alignment",
                    format!("'{}' não corresponde a {}..{}", span.text, span.start, span.end),
                ));
            }
        }
    }

    Ok(())
}

/// Verifica que as palavras etiquetadas seguem a ordem em que aparecem no texto.
///
/// Palavras ausentes do texto (tokens normalizados ou fundidos) são ignoradas; uma
/// palavra que só existe antes da posição da palavra anterior é violação.
pub fn check_tagger<T>(tagger: &T, samples: &[&str]) -> Result<(), Violation>
where
    T: Tagger + ?Sized,
{
    let cap = Capability::Tagger;
    let name = tagger.name();

    for &text in samples {
        let tagged = tagger
            .tag(text, true)
            .map_err(|e| failed(cap, name, "tag", e))?;

        let mut cursor = 0;
        for tw in &tagged {
            match text[cursor..].find(tw.word.as_str()) {
                Some(offset) => cursor += offset + tw.word.len(),
                None if text.contains(tw.word.as_str()) => {
                    return Err(violation(
                        cap,
                        name,
                        "word_order",
                        format!("'{}' fora de ordem em {:?}", tw.word, text),
                    ));
                }
                None => {}
            }
        }
    }

    Ok(())
}

/// Verifica um extrator de sintagmas nominais.
pub fn check_np_extractor<T>(extractor: &T, samples: &[&str]) -> Result<(), Violation>
where
    T: NpExtractor + ?Sized,
{
    let cap = Capability::NpExtractor;
    let name = extractor.name();

    let empty = extractor
        .extract("")
        .map_err(|e| failed(cap, name, "empty_input", e))?;
    if !empty.is_empty() {
        return Err(violation(cap, name, "empty_input", format!("{:?}", empty)));
    }

    for &text in samples {
        let first = extractor
            .extract(text)
            .map_err(|e| failed(cap, name, "extract", e))?;
        let second = extractor
            .extract(text)
            .map_err(|e| failed(cap, name, "extract", e))?;
        if first != second {
            let detail = format!("{:?} != {:?}", first, second);
            return Err(violation(cap, name, "deterministic", detail));
        }
    }

    Ok(())
}

/// Verifica o ciclo de treino de um analisador (que deve estar recém-construído).
pub fn check_sentiment_lifecycle<A>(analyzer: &mut A, sample: &str) -> Result<(), Violation>
where
    A: SentimentAnalyzer + ?Sized,
{
    let cap = Capability::SentimentAnalyzer;
    let name = analyzer.name().to_string();

    if analyzer.training_state() != TrainingState::Untrained {
        return Err(violation(cap, &name, "starts_untrained", "instância nova já treinada"));
    }

    analyzer
        .analyze(sample)
        .map_err(|e| failed(cap, &name, "lazy_training", e))?;
    if analyzer.training_state() != TrainingState::Trained {
        return Err(violation(cap, &name, "lazy_training", "analyze não treinou o analisador"));
    }

    analyzer
        .analyze(sample)
        .map_err(|e| failed(cap, &name, "analyze", e))?;
    analyzer
        .train()
        .map_err(|e| failed(cap, &name, "train_idempotent", e))?;
    if analyzer.training_state() != TrainingState::Trained {
        return Err(violation(cap, &name, "train_idempotent", "estado saiu de Trained"));
    }

    Ok(())
}

/// Verifica que um parser trata texto e bytes equivalentes da mesma forma.
pub fn check_parser<T>(parser: &T, samples: &[&str]) -> Result<(), Violation>
where
    T: Parser + ?Sized,
    T::Output: PartialEq + std::fmt::Debug,
{
    let cap = Capability::Parser;
    let name = parser.name();

    for &text in samples {
        let from_text = parser
            .parse(ParseInput::Text(text))
            .map_err(|e| failed(cap, name, "parse", e))?;
        let from_bytes = parser
            .parse(ParseInput::Bytes(text.as_bytes()))
            .map_err(|e| failed(cap, name, "parse", e))?;
        if from_text != from_bytes {
            return Err(violation(
                cap,
                name,
                "text_bytes_equivalent",
                format!("{:?} != {:?}", from_text, from_bytes),
            ));
        }
    }

    Ok(())
}
