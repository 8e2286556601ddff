//! # Contrato de Extração de Sintagmas Nominais
//!
//! Um [`NpExtractor`] devolve os sintagmas nominais (noun phrases) de um texto como
//! strings, na ordem da primeira aparição. Duplicatas são permitidas e uma lista vazia
//! é um resultado válido (o texto simplesmente não tem sintagmas), nunca um erro.
//!
//! O texto chega como `&str`, então a extração não tem como alterá-lo.

use crate::error::Result;

/// Extrator de sintagmas nominais.
pub trait NpExtractor {
    /// Retorna os sintagmas nominais de `text`.
    fn extract(&self, text: &str) -> Result<Vec<String>>;

    /// Identificador da implementação (para logs e configuração).
    fn name(&self) -> &str {
        "np_extractor"
    }
}
