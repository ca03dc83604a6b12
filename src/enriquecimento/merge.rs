use serde::Serialize;
use std::fmt;

use crate::enriquecimento::equivalencias::{Equivalencias, Resolucao, resolver};
use crate::models::{Curriculo, EntradaCatalogo, TipoDisciplina};

/// Contagens do merge. São o sinal principal de regressão na qualidade dos
/// dados: `sem_match` subindo de uma execução para outra quer dizer código
/// novo no catálogo ou equivalência faltando.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResumoEnriquecimento {
    pub total: usize,
    pub diretos: usize,
    pub via_equivalencia: usize,
    pub sem_match: usize,
}

impl ResumoEnriquecimento {
    pub fn com_match(&self) -> usize {
        self.diretos + self.via_equivalencia
    }
}

impl fmt::Display for ResumoEnriquecimento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} matérias enriquecidas ({} com match [{} via equivalência], {} sem match)",
            self.total,
            self.com_match(),
            self.via_equivalencia,
            self.sem_match
        )
    }
}

/// Preenche `periodo`, `tipo`, `prerequisitos` e `corequisitos` de cada oferta.
///
/// Sem match os quatro campos recebem o default documentado (`null`,
/// `"optativa"`, `[]`, `[]`), então todo consumidor pode contar com eles.
/// Sobrescreve sempre: rodar de novo sobre a própria saída dá o mesmo arquivo.
pub fn enriquecer(
    entradas: &mut [EntradaCatalogo],
    curriculo: &Curriculo,
    equivalencias: &Equivalencias,
) -> ResumoEnriquecimento {
    let indice = curriculo.indice();
    let mut resumo = ResumoEnriquecimento { total: entradas.len(), ..Default::default() };

    for entrada in entradas.iter_mut() {
        let resolucao = resolver(&entrada.codigo, &indice, equivalencias);
        match resolucao {
            Resolucao::Direta(_) => resumo.diretos += 1,
            Resolucao::ViaEquivalencia { canonico, .. } => {
                log::debug!("{} turma {:?} -> {} via equivalência", entrada.codigo, entrada.turma(), canonico);
                resumo.via_equivalencia += 1;
            }
            Resolucao::SemMatch => resumo.sem_match += 1,
        }

        match resolucao.disciplina() {
            Some(d) => {
                entrada.periodo = d.periodo;
                entrada.tipo = d.tipo;
                entrada.prerequisitos = d.prerequisitos.clone();
                entrada.corequisitos = d.corequisitos.clone();
            }
            None => {
                entrada.periodo = None;
                entrada.tipo = TipoDisciplina::Optativa;
                entrada.prerequisitos = Vec::new();
                entrada.corequisitos = Vec::new();
            }
        }
    }

    resumo
}
