//! Sugestões de equivalência para ofertas sem match, por nome parecido.
//! Só informativo: nada aqui muda o resultado do enriquecimento.

use serde::Serialize;
use std::collections::HashSet;

use crate::enriquecimento::equivalencias::{Equivalencias, Resolucao, resolver};
use crate::matriz::normalizacao::normalizar;
use crate::models::{Curriculo, EntradaCatalogo};

/// Similaridade mínima (Levenshtein normalizado) para sugerir
pub const LIMIAR_SIMILARIDADE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sugestao {
    pub codigo_catalogo: String,
    pub nome_catalogo: String,
    pub codigo_matriz: String,
    pub nome_matriz: String,
    pub similaridade: f64,
}

/// Para cada código sem match (uma vez por código, não por turma), a
/// disciplina da matriz de nome mais parecido, se passar do limiar.
pub fn sugerir_equivalencias(
    entradas: &[EntradaCatalogo],
    curriculo: &Curriculo,
    equivalencias: &Equivalencias,
) -> Vec<Sugestao> {
    let indice = curriculo.indice();
    let nomes_matriz: Vec<(String, &str, &str)> = curriculo
        .disciplinas
        .iter()
        .filter(|d| !d.nome.is_empty())
        .map(|d| (normalizar(&d.nome), d.codigo.as_str(), d.nome.as_str()))
        .collect();

    let mut vistos: HashSet<&str> = HashSet::new();
    let mut sugestoes = Vec::new();

    for entrada in entradas {
        if !matches!(resolver(&entrada.codigo, &indice, equivalencias), Resolucao::SemMatch) {
            continue;
        }
        if !vistos.insert(entrada.codigo.as_str()) {
            continue;
        }
        let Some(nome) = entrada.nome() else { continue };
        let nome_norm = normalizar(nome);

        let mut melhor: Option<(f64, &str, &str)> = None;
        for (norm, codigo, nome_matriz) in &nomes_matriz {
            let sim = strsim::normalized_levenshtein(&nome_norm, norm);
            if sim >= LIMIAR_SIMILARIDADE && melhor.is_none_or(|(m, _, _)| sim > m) {
                melhor = Some((sim, *codigo, *nome_matriz));
            }
        }

        if let Some((similaridade, codigo, nome_matriz)) = melhor {
            log::info!(
                "💡 {} ({}) parece {} ({}) [{:.2}]",
                entrada.codigo, nome, codigo, nome_matriz, similaridade
            );
            sugestoes.push(Sugestao {
                codigo_catalogo: entrada.codigo.clone(),
                nome_catalogo: nome.to_string(),
                codigo_matriz: codigo.to_string(),
                nome_matriz: nome_matriz.to_string(),
                similaridade,
            });
        }
    }

    sugestoes
}
