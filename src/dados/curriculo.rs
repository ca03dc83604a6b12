use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

use crate::dados::io::{escrever_json_atomico, ler_json};
use crate::error::{MatrizError, Result};
use crate::models::{Curriculo, Disciplina, Metadados};

/// Variantes aceitas na leitura do arquivo da matriz.
///
/// - `Envelope`: `{ "disciplinas": [...], "nome_faculdade": ..., ... }`
/// - `Legado`: array puro de disciplinas, sem metadados nem `corequisitos`
///
/// A variante sai da forma do JSON (objeto ou array) uma vez só, e daí cada
/// disciplina é lida separadamente para o erro apontar qual e em que campo.
#[derive(Debug)]
pub enum ArquivoCurriculo {
    Envelope(Curriculo),
    Legado(Vec<Disciplina>),
}

// erro de serde com o caminho do campo na frente
fn ler_valor<T: DeserializeOwned>(valor: Value, caminho: &str) -> std::result::Result<T, String> {
    serde_json::from_value(valor).map_err(|e| format!("{}: {}", caminho, e))
}

fn ler_disciplinas(itens: Vec<Value>, prefixo: &str) -> std::result::Result<Vec<Disciplina>, String> {
    itens
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let codigo = item.get("codigo").and_then(Value::as_str).map(|c| format!(" ({})", c)).unwrap_or_default();
            ler_valor(item, &format!("{}[{}]{}", prefixo, i, codigo))
        })
        .collect()
}

fn tipo_json(valor: &Value) -> &'static str {
    match valor {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "objeto",
    }
}

fn campo_opcional<T: DeserializeOwned>(obj: &mut Map<String, Value>, chave: &str) -> std::result::Result<Option<T>, String> {
    match obj.remove(chave) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => ler_valor(v, chave).map(Some),
    }
}

impl ArquivoCurriculo {
    /// Escolhe a variante pela forma do JSON. O `Err` é legível e cita o campo.
    pub fn de_valor(valor: Value) -> std::result::Result<ArquivoCurriculo, String> {
        match valor {
            Value::Array(itens) => Ok(ArquivoCurriculo::Legado(ler_disciplinas(itens, "")?)),
            Value::Object(mut obj) => {
                let disciplinas = match obj.remove("disciplinas") {
                    Some(Value::Array(itens)) => ler_disciplinas(itens, "disciplinas")?,
                    Some(outro) => return Err(format!("disciplinas: esperado array, veio {}", tipo_json(&outro))),
                    None => return Err("campo `disciplinas` ausente".to_string()),
                };
                let metadados = Metadados {
                    nome_faculdade: campo_opcional(&mut obj, "nome_faculdade")?,
                    numero_curriculo: campo_opcional(&mut obj, "numero_curriculo")?,
                    horas_obrigatorias: campo_opcional(&mut obj, "horas_obrigatorias")?,
                    carga_horaria_total: campo_opcional(&mut obj, "carga_horaria_total")?,
                };
                Ok(ArquivoCurriculo::Envelope(Curriculo { disciplinas, metadados }))
            }
            outro => Err(format!("esperado objeto com `disciplinas` ou array de disciplinas, veio {}", tipo_json(&outro))),
        }
    }
}

impl From<ArquivoCurriculo> for Curriculo {
    fn from(arquivo: ArquivoCurriculo) -> Self {
        match arquivo {
            ArquivoCurriculo::Envelope(c) => c,
            ArquivoCurriculo::Legado(disciplinas) => Curriculo { disciplinas, ..Default::default() },
        }
    }
}

pub fn ler_curriculo(path: &Path) -> Result<Curriculo> {
    let valor: Value = ler_json(path)?;
    let arquivo = ArquivoCurriculo::de_valor(valor)
        .map_err(|motivo| MatrizError::Formato { origem: path.display().to_string(), motivo })?;
    if matches!(arquivo, ArquivoCurriculo::Legado(_)) {
        log::debug!("{}: formato legado (array sem envelope)", path.display());
    }
    Ok(arquivo.into())
}

/// Sempre escreve o formato envelope.
pub fn salvar_curriculo(path: &Path, curriculo: &Curriculo) -> Result<()> {
    escrever_json_atomico(path, curriculo)
}
