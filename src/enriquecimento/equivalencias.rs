//! Equivalências entre códigos do quadro de horários (catálogo) e códigos da
//! matriz. Disciplinas renumeradas continuam aparecendo no catálogo com o
//! código antigo.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

use crate::dados::io::ler_json;
use crate::error::{MatrizError, Result};
use crate::models::Disciplina;

/// Chave reservada para comentário humano no arquivo de equivalências
pub const CHAVE_COMENTARIO: &str = "_comentario";

/// código do catálogo -> código canônico da matriz
pub type Equivalencias = HashMap<String, String>;

/// Monta o mapa a partir do objeto JSON cru.
/// Ignora a chave de comentário e valores que não são string.
pub fn equivalencias_de_objeto(raw: Map<String, Value>) -> Equivalencias {
    let mut equivalencias = HashMap::new();
    for (chave, valor) in raw {
        if chave == CHAVE_COMENTARIO {
            continue;
        }
        match valor {
            Value::String(canonico) => {
                equivalencias.insert(chave.trim().to_uppercase(), canonico.trim().to_uppercase());
            }
            other => log::warn!("⚠️  equivalência {:?} ignorada: valor não é string ({})", chave, other),
        }
    }
    equivalencias
}

/// Carrega o arquivo de equivalências. Ele é opcional: ausente => mapa vazio.
pub fn carregar_equivalencias(path: &Path) -> Result<Equivalencias> {
    let raw: Map<String, Value> = match ler_json(path) {
        Ok(raw) => raw,
        Err(MatrizError::NaoEncontrado { .. }) => {
            log::info!("sem arquivo de equivalências em {}", path.display());
            return Ok(HashMap::new());
        }
        Err(e) => return Err(e),
    };
    let equivalencias = equivalencias_de_objeto(raw);
    log::info!("✅ {} equivalências carregadas", equivalencias.len());
    Ok(equivalencias)
}

/// Como um código do catálogo chegou (ou não) numa disciplina da matriz
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolucao<'a> {
    Direta(&'a Disciplina),
    ViaEquivalencia { canonico: &'a str, disciplina: &'a Disciplina },
    SemMatch,
}

impl<'a> Resolucao<'a> {
    pub fn disciplina(&self) -> Option<&'a Disciplina> {
        match self {
            Resolucao::Direta(d) => Some(*d),
            Resolucao::ViaEquivalencia { disciplina, .. } => Some(*disciplina),
            Resolucao::SemMatch => None,
        }
    }
}

/// Resolve o código do catálogo contra o índice da matriz.
///
/// 1. o próprio código, se está na matriz;
/// 2. senão o equivalente, mas só se *ele* também está na matriz (uma
///    equivalência pendurada não vira lookup fantasma);
/// 3. senão `SemMatch`.
pub fn resolver<'a>(
    codigo: &str,
    indice: &HashMap<&'a str, &'a Disciplina>,
    equivalencias: &'a Equivalencias,
) -> Resolucao<'a> {
    if let Some(&d) = indice.get(codigo) {
        return Resolucao::Direta(d);
    }
    match equivalencias.get(codigo) {
        Some(canonico) => match indice.get(canonico.as_str()) {
            Some(&d) => Resolucao::ViaEquivalencia { canonico: canonico.as_str(), disciplina: d },
            None => {
                log::debug!("equivalência {} -> {} aponta para código fora da matriz", codigo, canonico);
                Resolucao::SemMatch
            }
        },
        None => Resolucao::SemMatch,
    }
}
