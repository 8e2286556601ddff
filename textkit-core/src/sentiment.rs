//! # Contrato de Análise de Sentimento
//!
//! Um [`SentimentAnalyzer`] mapeia texto para um julgamento de sentimento. O formato do
//! resultado é escolha de cada analisador (tupla, escore, mapa categoria → escore) e é
//! declarado pelo tipo associado `Output`. Quem consome decide como tratar o resultado
//! olhando para [`AnalyzerKind`], nunca para o tipo concreto.
//!
//! ## Ciclo de Treino
//!
//! Cada analisador possui uma pequena máquina de estados ([`TrainingGate`]):
//!
//! ```text
//!   Untrained ──train() ok──▶ Trained   (terminal)
//!       │
//!       └──train() falha──▶ Untrained   (erro propagado)
//! ```
//!
//! - `analyze` treina preguiçosamente na primeira chamada; as seguintes pulam o treino.
//! - `train` pode ser chamado antes para forçar o treino antecipado; chamá-lo de novo
//!   depois de `Trained` não faz nada e retorna `Ok(())`.
//! - O trabalho real de treino fica em [`SentimentAnalyzer::fit`], cujo padrão é um
//!   no-op. Analisadores concretos sobrescrevem `fit` (ex: carregar um classificador).
//!
//! `analyze` e `train` recebem `&mut self`: o estado pertence exclusivamente à
//! instância. Uso concorrente exige que o chamador envolva o analisador num lock.

use std::cell::Cell;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Forma da saída de um analisador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalyzerKind {
    /// **Discreto**: saída categórica (ex: "pos"/"neg" com probabilidades).
    #[default]
    #[serde(rename = "ds")]
    Discrete,
    /// **Contínuo**: saída numérica (ex: polaridade em [-1, 1]).
    #[serde(rename = "co")]
    Continuous,
}

impl AnalyzerKind {
    /// Código curto do tipo ("ds" ou "co")
    pub fn code(&self) -> &'static str {
        match self {
            AnalyzerKind::Discrete => "ds",
            AnalyzerKind::Continuous => "co",
        }
    }

    /// Tenta parsear a partir do código (ex: "co" → Some(Continuous))
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "ds" => Some(AnalyzerKind::Discrete),
            "co" => Some(AnalyzerKind::Continuous),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Estado de treino de um analisador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingState {
    #[default]
    Untrained,
    Trained,
}

/// Guarda o estado de treino de uma instância de analisador.
///
/// Só avança de `Untrained` para `Trained`, e apenas por [`SentimentAnalyzer::train`]
/// depois de `fit` ter sucesso; não existe transição de volta. Quem está fora do crate
/// enxerga o estado, mas não consegue marcá-lo:
///
/// ```compile_fail
/// let gate = textkit_core::TrainingGate::new();
/// gate.complete();
/// ```
#[derive(Debug, Default)]
pub struct TrainingGate {
    state: Cell<TrainingState>,
}

impl TrainingGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrainingState {
        self.state.get()
    }

    pub fn is_trained(&self) -> bool {
        self.state() == TrainingState::Trained
    }

    /// Marca o treino como concluído.
    pub(crate) fn complete(&self) {
        if !self.is_trained() {
            debug!("analisador treinado");
        }
        self.state.set(TrainingState::Trained);
    }
}

/// Analisador de sentimento com treino preguiçoso.
///
/// Implementações fornecem `training` (acesso ao [`TrainingGate`] da instância),
/// `classify` (a análise em si) e, opcionalmente, `fit` e `kind`.
/// Os métodos `train` e `analyze` já implementam a máquina de estados e não devem
/// ser sobrescritos.
pub trait SentimentAnalyzer {
    /// Resultado da análise, documentado por cada analisador.
    type Output;

    /// Forma da saída. `Discrete` a menos que o analisador declare outra.
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Discrete
    }

    fn training(&self) -> &TrainingGate;

    /// Trabalho de treino. O padrão não faz nada.
    fn fit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Analisa um texto assumindo que o analisador já está treinado.
    fn classify(&self, text: &str) -> Result<Self::Output>;

    /// Identificador da implementação (para logs e configuração).
    fn name(&self) -> &str {
        "sentiment_analyzer"
    }

    fn training_state(&self) -> TrainingState {
        self.training().state()
    }

    /// Treina o analisador se ainda não estiver treinado.
    ///
    /// Se `fit` falhar o estado continua `Untrained` e o erro é devolvido.
    fn train(&mut self) -> Result<()> {
        if self.training().is_trained() {
            return Ok(());
        }
        debug!(analyzer = self.name(), "iniciando treino");
        self.fit().map_err(|err| match err {
            Error::Training(_) => err,
            other => Error::training(other),
        })?;
        self.training().complete();
        Ok(())
    }

    /// Analisa o texto, treinando antes se for a primeira vez.
    fn analyze(&mut self, text: &str) -> Result<Self::Output> {
        if !self.training().is_trained() {
            self.train()?;
        }
        self.classify(text)
    }
}
