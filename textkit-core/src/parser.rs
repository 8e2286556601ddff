//! # Contrato de Análise Sintática
//!
//! O [`Parser`] existe para dar uma forma de chamada uniforme a parsers de naturezas
//! diferentes (dependências, constituintes, chunking), de modo que o pipeline possa
//! trocar um pelo outro. O formato do resultado fica a cargo de cada implementação,
//! através do tipo associado `Output`.
//!
//! A entrada pode ser texto (`&str`) ou bytes (`&[u8]`); [`ParseInput`] aceita as duas
//! formas e [`ParseInput::as_text`] converte bytes em texto validando o UTF-8.

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Entrada de um parser: texto ou bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> ParseInput<'a> {
    /// Retorna a entrada como texto.
    ///
    /// Bytes que não formam UTF-8 válido resultam em `Error::InvalidInput`.
    pub fn as_text(&self) -> Result<Cow<'a, str>> {
        match *self {
            ParseInput::Text(text) => Ok(Cow::Borrowed(text)),
            ParseInput::Bytes(bytes) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| Error::invalid_input(format!("bytes não são UTF-8 válido: {}", e))),
        }
    }

    /// Retorna a entrada como bytes (sempre possível).
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            ParseInput::Text(text) => text.as_bytes(),
            ParseInput::Bytes(bytes) => bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl<'a> From<&'a str> for ParseInput<'a> {
    fn from(text: &'a str) -> Self {
        ParseInput::Text(text)
    }
}

impl<'a> From<&'a String> for ParseInput<'a> {
    fn from(text: &'a String) -> Self {
        ParseInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for ParseInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ParseInput::Bytes(bytes)
    }
}

/// Parser de texto com resultado definido pela implementação.
pub trait Parser {
    type Output;

    /// Analisa a entrada. Falhas são sempre devolvidas, nunca engolidas.
    fn parse(&self, input: ParseInput<'_>) -> Result<Self::Output>;

    /// Identificador da implementação (para logs e configuração).
    fn name(&self) -> &str {
        "parser"
    }
}
