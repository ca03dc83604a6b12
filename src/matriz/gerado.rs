//! Importação de uma matriz gerada por um passo externo (ex: um modelo que lê
//! o PDF e devolve JSON). A resposta pode vir cercada de cerca markdown e com
//! códigos repetidos ou inválidos.

use serde_json::Value;

use crate::dados::ArquivoCurriculo;
use crate::error::{MatrizError, Result};
use crate::matriz::codigo::codigo_valido;
use crate::matriz::dedup::deduplicar;
use crate::models::{Curriculo, Disciplina};

/// Remove uma cerca ```` ``` ```` (com ou sem linguagem) em volta do payload.
pub fn remover_cerca_markdown(texto: &str) -> &str {
    let texto = texto.trim();
    let Some(resto) = texto.strip_prefix("```") else { return texto };

    // pula o rótulo de linguagem (```json)
    let corpo = match resto.find('\n') {
        Some(i) => &resto[i + 1..],
        None => resto,
    };
    let corpo = match corpo.rfind("```") {
        Some(i) => &corpo[..i],
        None => corpo,
    };
    corpo.trim()
}

/// Faixa válida de `periodo` numa matriz
const PERIODOS: std::ops::RangeInclusive<u8> = 1..=10;

/// Origem citada nos erros de formato de uma resposta gerada
const ORIGEM_GERADA: &str = "resposta gerada";

// requisitos fora do padrão de código são descartados
fn filtrar_requisitos(codigo: &str, campo: &str, requisitos: Vec<String>) -> Vec<String> {
    requisitos
        .into_iter()
        .filter(|r| {
            let ok = codigo_valido(r);
            if !ok {
                log::warn!("{}: {} inválido descartado: {:?}", codigo, campo, r);
            }
            ok
        })
        .collect()
}

/// Valida e normaliza o JSON gerado: aceita envelope ou array legado,
/// descarta códigos inválidos e repetidos (primeira ocorrência vence).
///
/// No mesmo passo, `periodo` fora de 1..=10 vira `None` (não periodizada) e
/// requisitos que não são código de disciplina saem da lista.
///
/// Texto que não é JSON vira `MatrizError::Schema` com os primeiros
/// caracteres do payload. JSON válido fora do contrato vira
/// `MatrizError::Formato`, citando a disciplina e o campo.
pub fn importar_gerado(raw: &str) -> Result<Curriculo> {
    let corpo = remover_cerca_markdown(raw);
    let valor: Value = serde_json::from_str(corpo).map_err(|e| MatrizError::schema(e.to_string(), corpo))?;
    let arquivo = ArquivoCurriculo::de_valor(valor)
        .map_err(|motivo| MatrizError::Formato { origem: ORIGEM_GERADA.to_string(), motivo })?;
    let mut curriculo: Curriculo = arquivo.into();

    let total = curriculo.disciplinas.len();
    let validas: Vec<Disciplina> = curriculo
        .disciplinas
        .into_iter()
        .filter_map(|mut d| {
            if !codigo_valido(&d.codigo) {
                log::warn!("código inválido descartado: {:?}", d.codigo);
                return None;
            }
            if let Some(p) = d.periodo.filter(|p| !PERIODOS.contains(p)) {
                log::warn!("{}: período {} fora de 1..=10, tratado como não periodizada", d.codigo, p);
                d.periodo = None;
            }
            d.prerequisitos = filtrar_requisitos(&d.codigo, "pré-requisito", std::mem::take(&mut d.prerequisitos));
            d.corequisitos = filtrar_requisitos(&d.codigo, "co-requisito", std::mem::take(&mut d.corequisitos));
            Some(d)
        })
        .collect();
    curriculo.disciplinas = deduplicar(validas);

    if curriculo.disciplinas.len() != total {
        log::info!("{} de {} disciplinas mantidas após validação", curriculo.disciplinas.len(), total);
    }
    Ok(curriculo)
}
