//! # Contrato de Etiquetagem Morfossintática (POS Tagging)
//!
//! Um [`Tagger`] recebe texto e devolve pares `(palavra, tag)` na ordem linear em que
//! as palavras aparecem. O conjunto de tags (Penn Treebank, Universal, ...) é escolha
//! da implementação concreta; o contrato só fixa a forma do resultado e a ordem.
//!
//! ## Formato Textual
//!
//! | Par                  | Forma textual  |
//! |----------------------|----------------|
//! | `("run", "VERB")`    | `run/VERB`     |
//! | `("fast", "ADV")`    | `fast/ADV`     |
//! | `("1/2", "CD")`      | `1/2/CD`       |
//!
//! A tag é sempre o trecho após a **última** barra, então palavras com `/` continuam
//! representáveis.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Uma palavra com sua etiqueta morfossintática.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl std::fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

impl FromStr for TaggedWord {
    type Err = Error;

    /// Parseia a forma `palavra/TAG` (ex: "run/VERB" → ("run", "VERB"))
    fn from_str(s: &str) -> Result<Self> {
        let (word, tag) = s.rsplit_once('/').ok_or_else(|| {
            Error::invalid_input(format!("'{}' não está no formato palavra/TAG", s))
        })?;
        if word.is_empty() || tag.is_empty() {
            return Err(Error::invalid_input(format!("'{}' tem palavra ou tag vazia", s)));
        }
        Ok(TaggedWord::new(word, tag))
    }
}

impl<W: Into<String>, T: Into<String>> From<(W, T)> for TaggedWord {
    fn from((word, tag): (W, T)) -> Self {
        TaggedWord::new(word, tag)
    }
}

impl From<TaggedWord> for (String, String) {
    fn from(tw: TaggedWord) -> Self {
        (tw.word, tw.tag)
    }
}

/// Etiquetador morfossintático.
pub trait Tagger {
    /// Retorna os pares `(palavra, tag)` do texto, na ordem em que aparecem.
    ///
    /// - `tokenize = true`: a implementação tokeniza o texto antes de etiquetar.
    /// - `tokenize = false`: o texto já vem tokenizado (tokens separados por espaço)
    ///   e não deve ser re-tokenizado.
    ///
    /// O número de pares pode diferir do número de palavras (implementações podem
    /// descartar ou fundir tokens, como pontuação). Entradas malformadas resultam em
    /// erro, nunca em um resultado degradado.
    fn tag(&self, text: &str, tokenize: bool) -> Result<Vec<TaggedWord>>;

    /// Etiqueta uma sequência de tokens já separados.
    ///
    /// Os tokens viajam até `tag(.., false)` separados por espaço, então um token
    /// vazio ou com espaço interno (ex: "New York") não sobreviveria intacto e é
    /// rejeitado com [`Error::InvalidInput`].
    fn tag_tokens(&self, tokens: &[&str]) -> Result<Vec<TaggedWord>> {
        if let Some(token) = tokens
            .iter()
            .find(|token| token.is_empty() || token.chars().any(char::is_whitespace))
        {
            return Err(Error::invalid_input(format!(
                "token '{}' vazio ou com espaço não pode ser etiquetado sem re-tokenizar",
                token
            )));
        }
        self.tag(&tokens.join(" "), false)
    }

    /// Identificador da implementação (para logs e configuração).
    fn name(&self) -> &str {
        "tagger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LexiconTagger;

    #[test]
    fn test_tag_run_fast() {
        let tagged = LexiconTagger::default().tag("run fast", true).unwrap();
        assert_eq!(
            tagged,
            vec![TaggedWord::new("run", "VERB"), TaggedWord::new("fast", "ADV")]
        );
    }

    #[test]
    fn test_tag_preserves_order() {
        let text = "the fox will run fast";
        let tagged = LexiconTagger::default().tag(text, true).unwrap();
        let words: Vec<&str> = tagged.iter().map(|tw| tw.word.as_str()).collect();
        assert_eq!(words, vec!["the", "fox", "will", "run", "fast"]);
    }

    #[test]
    fn test_tag_pretokenized_is_not_retokenized() {
        let tagger = LexiconTagger::default();

        // Com tokenize=true a pontuação é separada; com false o token fica intacto
        let split = tagger.tag("run fast.", true).unwrap();
        assert_eq!(split.len(), 3);
        assert_eq!(split[2], TaggedWord::new(".", "."));

        let kept = tagger.tag("run fast.", false).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].word, "fast.");
    }

    #[test]
    fn test_tag_tokens() {
        let tagged = LexiconTagger::default().tag_tokens(&["fox", "run"]).unwrap();
        assert_eq!(tagged[0], TaggedWord::new("fox", "NOUN"));
        assert_eq!(tagged[1], TaggedWord::new("run", "VERB"));
    }

    #[test]
    fn test_tag_tokens_rejects_multiword_token() {
        let tagger = LexiconTagger::default();
        let err = tagger.tag_tokens(&["New York", "run"]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = tagger.tag_tokens(&["fox", "", "run"]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        assert!(tagger.tag_tokens(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_tag_invalid_input_is_error() {
        let err = LexiconTagger::default().tag("run \u{0} fast", true).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_tagged_word_display_and_parse() {
        let tw = TaggedWord::new("run", "VERB");
        assert_eq!(tw.to_string(), "run/VERB");
        assert_eq!("run/VERB".parse::<TaggedWord>().unwrap(), tw);

        let fraction: TaggedWord = "1/2/CD".parse().unwrap();
        assert_eq!(fraction.word, "1/2");
        assert_eq!(fraction.tag, "CD");
    }

    #[test]
    fn test_tagged_word_parse_errors() {
        assert!("run".parse::<TaggedWord>().is_err());
        assert!("run/".parse::<TaggedWord>().is_err());
        assert!("/VERB".parse::<TaggedWord>().is_err());
    }

    #[test]
    fn test_tagged_word_tuple_conversions() {
        let tw: TaggedWord = ("fox", "NOUN").into();
        let pair: (String, String) = tw.into();
        assert_eq!(pair, ("fox".to_string(), "NOUN".to_string()));
    }

    #[test]
    fn test_tagged_word_serde() {
        let json = serde_json::to_string(&TaggedWord::new("fox", "NOUN")).unwrap();
        assert_eq!(json, r#"{"word":"fox","tag":"NOUN"}"#);
    }
}
