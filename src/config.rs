//! Configuração: `.env` + variáveis de ambiente + defaults.
//!
//! Precedência: flag da CLI > variável de ambiente > default relativo a
//! `MATRIZ_DATA_DIR` (ou `dados/` no diretório atual).

use std::env;
use std::path::{Path, PathBuf};

/// Diretório de dados padrão (relativo ao CWD)
pub const DADOS_DIR: &str = "dados";

pub const ARQ_LAYOUT: &str = "matriz_layout.json";
pub const ARQ_CURRICULO: &str = "matriz_curricular.json";
pub const ARQ_CATALOGO: &str = "db_disciplinas.json";
pub const ARQ_EQUIVALENCIAS: &str = "equivalencias.json";
pub const ARQ_GERADO: &str = "matriz_gerada.json";

// carrega .env se existir; ausência não é erro
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Resolve o diretório de dados. Honra `MATRIZ_DATA_DIR`.
pub fn dados_dir() -> PathBuf {
    load_dotenv();
    match env::var("MATRIZ_DATA_DIR") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DADOS_DIR),
    }
}

fn caminho(var: &str, base: &Path, arquivo: &str) -> PathBuf {
    match env::var(var) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => base.join(arquivo),
    }
}

/// Caminhos default de todos os arquivos do pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct Caminhos {
    pub layout: PathBuf,
    pub curriculo: PathBuf,
    pub catalogo: PathBuf,
    pub equivalencias: PathBuf,
    pub gerado: PathBuf,
}

impl Caminhos {
    /// `MATRIZ_LAYOUT`, `MATRIZ_CURRICULO`, `MATRIZ_CATALOGO`,
    /// `MATRIZ_EQUIVALENCIAS`, `MATRIZ_GERADO` sobrescrevem cada um.
    pub fn do_ambiente() -> Self {
        let base = dados_dir();
        Caminhos {
            layout: caminho("MATRIZ_LAYOUT", &base, ARQ_LAYOUT),
            curriculo: caminho("MATRIZ_CURRICULO", &base, ARQ_CURRICULO),
            catalogo: caminho("MATRIZ_CATALOGO", &base, ARQ_CATALOGO),
            equivalencias: caminho("MATRIZ_EQUIVALENCIAS", &base, ARQ_EQUIVALENCIAS),
            gerado: caminho("MATRIZ_GERADO", &base, ARQ_GERADO),
        }
    }
}

/// Quais colunas da tabela da matriz carregam cada campo (índices 0-based).
///
/// Colunas opcionais em `None` não são lidas: sem `tipo` ele sai do período,
/// sem `corequisitos` a lista fica vazia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColunasMatriz {
    pub codigo: usize,
    pub nome: usize,
    pub tipo: Option<usize>,
    pub prerequisitos: Option<usize>,
    pub corequisitos: Option<usize>,
}

impl Default for ColunasMatriz {
    fn default() -> Self {
        ColunasMatriz {
            codigo: 0,
            nome: 1,
            tipo: Some(2),
            prerequisitos: Some(3),
            corequisitos: Some(4),
        }
    }
}
