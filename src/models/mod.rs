// Estruturas de dados principais

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Obrigatória (OB) ou optativa (OP)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoDisciplina {
    Obrigatoria,
    #[default]
    Optativa,
}

impl TipoDisciplina {
    /// Tipo implícito quando a matriz não traz a coluna: sem período => optativa.
    pub fn pelo_periodo(periodo: Option<u8>) -> Self {
        match periodo {
            Some(_) => TipoDisciplina::Obrigatoria,
            None => TipoDisciplina::Optativa,
        }
    }
}

/// Uma disciplina da matriz curricular.
///
/// `periodo == None` significa "não periodizada" (eletiva, sem termo fixo).
/// `prerequisitos` e `corequisitos` guardam a ordem da primeira aparição,
/// sem repetidos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disciplina {
    pub codigo: String,
    #[serde(default)]
    pub nome: String,
    pub periodo: Option<u8>,
    pub tipo: TipoDisciplina,
    #[serde(default)]
    pub prerequisitos: Vec<String>,
    // o formato legado não tem co-requisitos
    #[serde(default)]
    pub corequisitos: Vec<String>,
}

/// Metadados do currículo (todos opcionais)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadados {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_faculdade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_curriculo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horas_obrigatorias: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carga_horaria_total: Option<u32>,
}

/// Forma canônica do currículo em memória (e a forma que o crate escreve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curriculo {
    pub disciplinas: Vec<Disciplina>,
    #[serde(flatten)]
    pub metadados: Metadados,
}

impl Curriculo {
    /// Índice por código para lookup O(1)
    pub fn indice(&self) -> HashMap<&str, &Disciplina> {
        self.disciplinas.iter().map(|d| (d.codigo.as_str(), d)).collect()
    }

    pub fn contar_por_tipo(&self) -> (usize, usize) {
        let obr = self.disciplinas.iter().filter(|d| d.tipo == TipoDisciplina::Obrigatoria).count();
        (obr, self.disciplinas.len() - obr)
    }
}

/// Oferta do catálogo raspado, identificada por `(codigo, turma)`.
///
/// Os campos do scraper (turma, nome, horários, professor, ch, link...) ficam
/// em `campos` como vieram, inclusive ausentes ou `null`. Os quatro campos de
/// enriquecimento são os únicos que `enriquecimento::merge` escreve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntradaCatalogo {
    pub codigo: String,
    #[serde(flatten)]
    pub campos: Map<String, Value>,
    #[serde(default)]
    pub periodo: Option<u8>,
    #[serde(default)]
    pub tipo: TipoDisciplina,
    #[serde(default)]
    pub prerequisitos: Vec<String>,
    #[serde(default)]
    pub corequisitos: Vec<String>,
}

impl EntradaCatalogo {
    pub fn new(codigo: &str, turma: &str) -> Self {
        let mut campos = Map::new();
        campos.insert("turma".to_string(), Value::String(turma.to_string()));
        EntradaCatalogo {
            codigo: codigo.to_string(),
            campos,
            periodo: None,
            tipo: TipoDisciplina::Optativa,
            prerequisitos: Vec::new(),
            corequisitos: Vec::new(),
        }
    }

    pub fn turma(&self) -> Option<&str> {
        self.campos.get("turma").and_then(|v| v.as_str())
    }

    /// Nome da oferta, se o scraper o trouxe
    pub fn nome(&self) -> Option<&str> {
        self.campos.get("nome").and_then(|v| v.as_str())
    }
}

/// Título de seção ("3º Período", "Não Periodizadas") ancorado numa posição
/// vertical da página.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarcadorPeriodo {
    pub top: f64,
    pub periodo: Option<u8>,
}

/// Linha crua de uma tabela com a posição vertical estimada.
#[derive(Debug, Clone, PartialEq)]
pub struct LinhaTabela {
    pub celulas: Vec<Option<String>>,
    pub top: f64,
}

impl LinhaTabela {
    pub fn celula(&self, idx: usize) -> Option<&str> {
        self.celulas.get(idx).and_then(|c| c.as_deref())
    }
}
