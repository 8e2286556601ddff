//! Dublês de teste compartilhados pelos módulos do crate.

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::np_extractor::NpExtractor;
use crate::parser::{ParseInput, Parser};
use crate::sentiment::{AnalyzerKind, SentimentAnalyzer, TrainingGate};
use crate::tagger::{TaggedWord, Tagger};
use crate::tokenizer::{GenericTokenizer, TokenStream, Tokenizer};

/// Separa por espaços; usa o `itokenize` padrão.
pub struct WhitespaceTokenizer;

impl GenericTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

impl Tokenizer for WhitespaceTokenizer {}

/// Separa por espaços com um `itokenize` incremental que conta os tokens produzidos.
#[derive(Default)]
pub struct LazyWhitespaceTokenizer {
    produced: Cell<usize>,
}

impl LazyWhitespaceTokenizer {
    pub fn produced(&self) -> usize {
        self.produced.get()
    }
}

impl GenericTokenizer for LazyWhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn name(&self) -> &str {
        "lazy_whitespace"
    }
}

impl Tokenizer for LazyWhitespaceTokenizer {
    fn itokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(TokenStream::new(text.split_whitespace().map(move |token| {
            self.produced.set(self.produced.get() + 1);
            token.to_string()
        })))
    }
}

/// Tagger com léxico fixo; palavras desconhecidas recebem "X".
pub struct LexiconTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        let lexicon = [
            ("the", "DET"),
            ("fox", "NOUN"),
            ("will", "AUX"),
            ("run", "VERB"),
            ("fast", "ADV"),
            (".", "."),
        ]
        .into_iter()
        .collect();
        Self { lexicon }
    }
}

impl LexiconTagger {
    fn lookup(&self, word: &str) -> TaggedWord {
        let tag = self.lexicon.get(word).copied().unwrap_or("X");
        TaggedWord::new(word, tag)
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str, tokenize: bool) -> Result<Vec<TaggedWord>> {
        if text.chars().any(char::is_control) {
            return Err(Error::invalid_input("caractere de controle no texto"));
        }

        let mut tagged = Vec::new();
        for word in text.split_whitespace() {
            if !tokenize {
                tagged.push(self.lookup(word));
                continue;
            }
            // Separa pontuação final (ex: "fast." → "fast", ".")
            let trimmed = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if !trimmed.is_empty() {
                tagged.push(self.lookup(trimmed));
            }
            for punct in word[trimmed.len()..].chars() {
                tagged.push(self.lookup(&punct.to_string()));
            }
        }
        Ok(tagged)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

/// Sequências de palavras capitalizadas viram sintagmas.
pub struct CapitalizedNpExtractor;

impl NpExtractor for CapitalizedNpExtractor {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut phrases = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for word in text.split_whitespace() {
            if word.chars().next().is_some_and(char::is_uppercase) {
                current.push(word);
            } else if !current.is_empty() {
                phrases.push(current.join(" "));
                current.clear();
            }
        }
        if !current.is_empty() {
            phrases.push(current.join(" "));
        }
        Ok(phrases)
    }

    fn name(&self) -> &str {
        "capitalized"
    }
}

/// Polaridade em [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity(pub f64);

/// Analisador contínuo que conta quantas vezes `fit` foi chamado.
#[derive(Default)]
pub struct CountingAnalyzer {
    gate: TrainingGate,
    pub fits: usize,
    pub fail: bool,
    pub fail_with_io: bool,
}

impl CountingAnalyzer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl SentimentAnalyzer for CountingAnalyzer {
    type Output = Polarity;

    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Continuous
    }

    fn training(&self) -> &TrainingGate {
        &self.gate
    }

    fn fit(&mut self) -> Result<()> {
        self.fits += 1;
        match (self.fail, self.fail_with_io) {
            (false, _) => Ok(()),
            (true, false) => Err(Error::training("corpus vazio")),
            (true, true) => Err(Error::component("polarity", "léxico indisponível")),
        }
    }

    fn classify(&self, text: &str) -> Result<Polarity> {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Polarity(0.0));
        }
        let score: f64 = words
            .iter()
            .map(|w| match *w {
                "good" => 1.0,
                "bad" => -1.0,
                _ => 0.0,
            })
            .sum();
        Ok(Polarity(score / words.len() as f64))
    }

    fn name(&self) -> &str {
        "polarity"
    }
}

/// Divide o texto em trechos separados por ".".
pub struct ChunkParser;

impl Parser for ChunkParser {
    type Output = Vec<String>;

    fn parse(&self, input: ParseInput<'_>) -> Result<Vec<String>> {
        let text = input.as_text()?;
        Ok(text
            .split('.')
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(String::from)
            .collect())
    }

    fn name(&self) -> &str {
        "chunk"
    }
}
