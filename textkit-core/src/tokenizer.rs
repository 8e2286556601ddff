//! # Contrato de Tokenização
//!
//! Um tokenizador divide o texto bruto em tokens (strings) preservando a ordem de
//! ocorrência. O contrato tem duas camadas:
//!
//! - [`GenericTokenizer`]: a capacidade genérica esperada pelo ecossistema de NLP
//!   (tokenização em strings, tokenização em spans com offsets e versões em lote).
//! - [`Tokenizer`]: estende a capacidade genérica com [`Tokenizer::itokenize`], que
//!   entrega os tokens sob demanda através de um [`TokenStream`].
//!
//! ## Eager vs. Lazy
//!
//! `tokenize` materializa todos os tokens de uma vez. `itokenize` devolve um iterador
//! de passagem única: cada token só é entregue quando o consumidor chama `next()`,
//! e parar de consumir equivale a cancelar. A implementação padrão calcula o resultado
//! de `tokenize` no momento da criação do stream (assim as falhas aparecem no próprio
//! `itokenize`) e o entrega elemento a elemento. Tokenizadores especializados podem
//! sobrescrever `itokenize` com um produtor realmente incremental.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use textkit_core::tokenizer::{GenericTokenizer, Tokenizer};
//! use textkit_core::Result;
//!
//! struct Whitespace;
//!
//! impl GenericTokenizer for Whitespace {
//!     fn tokenize(&self, text: &str) -> Result<Vec<String>> {
//!         Ok(text.split_whitespace().map(String::from).collect())
//!     }
//! }
//!
//! impl Tokenizer for Whitespace {}
//!
//! let eager = Whitespace.tokenize("the quick fox").unwrap();
//! let lazy: Vec<String> = Whitespace.itokenize("the quick fox").unwrap().collect();
//! assert_eq!(eager, lazy);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Um token localizado no texto original.
///
/// Além do texto, guarda a posição exata (`start`, `end`) no texto de entrada, o que
/// permite que ferramentas externas destaquem ou recortem o trecho sem re-tokenizar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSpan {
    /// O texto do token (ex: "quick").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Sequência preguiçosa de tokens produzida por [`Tokenizer::itokenize`].
///
/// É de passagem única: depois de retornar `None` continua retornando `None`.
/// Para recomeçar, chama-se `itokenize` de novo.
pub struct TokenStream<'a> {
    inner: std::iter::Fuse<Box<dyn Iterator<Item = String> + 'a>>,
}

impl<'a> TokenStream<'a> {
    /// Envolve um iterador qualquer de tokens.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = String> + 'a,
    {
        let boxed: Box<dyn Iterator<Item = String> + 'a> = Box::new(iter);
        Self {
            inner: boxed.fuse(),
        }
    }

    /// Entrega um resultado já materializado, um token por vez.
    pub fn from_vec(tokens: Vec<String>) -> Self {
        Self::new(tokens.into_iter())
    }
}

impl Iterator for TokenStream<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl std::iter::FusedIterator for TokenStream<'_> {}

impl std::fmt::Debug for TokenStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStream").finish_non_exhaustive()
    }
}

/// Capacidade genérica de tokenização.
///
/// Só `tokenize` é obrigatório; as demais operações têm implementação padrão
/// derivada dele.
pub trait GenericTokenizer {
    /// Retorna a lista de tokens do texto, na ordem em que aparecem.
    ///
    /// Deve ser determinístico: a mesma entrada produz sempre a mesma saída.
    /// Texto vazio produz lista vazia.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Identificador da implementação (para logs e configuração).
    fn name(&self) -> &str {
        "tokenizer"
    }

    /// Retorna os tokens com seus offsets de byte no texto original.
    ///
    /// A implementação padrão alinha cada token de `tokenize` ao texto da esquerda
    /// para a direita. Tokenizadores que normalizam o texto (ex: trocam aspas) não
    /// conseguem ser alinhados e devem sobrescrever este método.
    fn span_tokenize(&self, text: &str) -> Result<Vec<TokenSpan>> {
        let tokens = self.tokenize(text)?;
        align_tokens(text, tokens)
    }

    /// Tokeniza várias sentenças, uma lista de tokens por sentença.
    fn tokenize_sents(&self, texts: &[&str]) -> Result<Vec<Vec<String>>> {
        texts.iter().map(|text| self.tokenize(text)).collect()
    }

    /// Versão em lote de [`GenericTokenizer::span_tokenize`].
    fn span_tokenize_sents(&self, texts: &[&str]) -> Result<Vec<Vec<TokenSpan>>> {
        texts.iter().map(|text| self.span_tokenize(text)).collect()
    }
}

/// Tokenizador do toolkit: a capacidade genérica mais a variante sob demanda.
pub trait Tokenizer: GenericTokenizer {
    /// Retorna um [`TokenStream`] que entrega os tokens sob demanda.
    ///
    /// Coletar o stream produz exatamente a mesma lista que `tokenize`; muda apenas
    /// o momento em que cada token chega ao consumidor.
    fn itokenize<'a>(&'a self, text: &'a str) -> Result<TokenStream<'a>> {
        let tokens = self.tokenize(text)?;
        debug!(tokenizer = self.name(), total = tokens.len(), "token stream criado");
        Ok(TokenStream::from_vec(tokens))
    }
}

/// Localiza cada token no texto original, avançando um cursor.
fn align_tokens(text: &str, tokens: Vec<String>) -> Result<Vec<TokenSpan>> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    for (index, token) in tokens.into_iter().enumerate() {
        let offset = text[cursor..].find(token.as_str()).ok_or_else(|| {
            Error::invalid_input(format!(
                "token '{}' não encontrado a partir do byte {}",
                token, cursor
            ))
        })?;
        let start = cursor + offset;
        let end = start + token.len();
        cursor = end;
        spans.push(TokenSpan {
            text: token,
            start,
            end,
            index,
        });
    }

    Ok(spans)
}
