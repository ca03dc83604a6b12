//! Erros do pipeline da matriz curricular.
//!
//! Só anomalias estruturais ou de arquivo chegam aqui. Uma linha que não é
//! disciplina ou um código do catálogo sem match são resolvidos localmente
//! (ver `matriz::linhas::ClassificacaoLinha` e `enriquecimento::merge`).

use std::path::PathBuf;
use thiserror::Error;

/// Resultado das operações do crate
pub type Result<T> = std::result::Result<T, MatrizError>;

/// Máximo de caracteres do payload exibidos num `Schema`
pub const TRECHO_MAX: usize = 500;

#[derive(Error, Debug)]
pub enum MatrizError {
    /// Arquivo de entrada obrigatório ausente
    #[error("arquivo não encontrado: {}", .path.display())]
    NaoEncontrado { path: PathBuf },

    /// O documento não tem a estrutura esperada (ex: nenhuma tabela)
    #[error("estrutura inesperada no documento: {0}")]
    Estrutural(String),

    /// Saída de um passo de geração externo que não é JSON válido
    #[error("resposta não é JSON válido: {motivo}\nprimeiros {max} caracteres:\n{trecho}", max = TRECHO_MAX)]
    Schema { motivo: String, trecho: String },

    /// JSON válido mas fora do contrato da matriz (campo ausente, tipo errado)
    #[error("matriz curricular fora do formato em {origem}: {motivo}")]
    Formato { origem: String, motivo: String },

    #[error("JSON inválido em {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("erro de E/S em {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MatrizError {
    /// Monta um `Schema` cortando o payload em `TRECHO_MAX` caracteres.
    pub fn schema(motivo: impl Into<String>, payload: &str) -> Self {
        MatrizError::Schema {
            motivo: motivo.into(),
            trecho: payload.chars().take(TRECHO_MAX).collect(),
        }
    }
}
