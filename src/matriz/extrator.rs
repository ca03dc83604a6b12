use std::fmt;

use crate::config::ColunasMatriz;
use crate::error::{MatrizError, Result};
use crate::layout::FonteLayout;
use crate::matriz::dedup::deduplicar;
use crate::matriz::linhas::{ClassificacaoLinha, classificar_linha, resolver_pagina};
use crate::matriz::marcadores::localizar_marcadores;
use crate::matriz::metadados::extrair_metadados;
use crate::models::Curriculo;

/// Contagens de uma extração, para o resumo da CLI e para os testes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelatorioExtracao {
    pub paginas: usize,
    pub tabelas: usize,
    pub marcadores: usize,
    pub linhas: usize,
    pub aceitas: usize,
    pub cabecalhos: usize,
    pub malformadas: usize,
    pub duplicadas: usize,
}

impl fmt::Display for RelatorioExtracao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} páginas | {} tabelas | {} títulos de período | {} linhas ({} aceitas, {} cabeçalhos, {} malformadas) | {} repetidas descartadas",
            self.paginas, self.tabelas, self.marcadores, self.linhas, self.aceitas, self.cabecalhos, self.malformadas, self.duplicadas
        )
    }
}

/// Extrai o currículo de um documento paginado.
///
/// Páginas em ordem, tabelas na ordem do documento, linhas na ordem impressa.
/// O período carregado entre páginas é o acumulador do fold. Documento sem
/// nenhuma tabela é erro estrutural: não é "currículo sem disciplinas".
pub fn extrair_curriculo<F: FonteLayout + ?Sized>(
    fonte: &F,
    colunas: &ColunasMatriz,
) -> Result<(Curriculo, RelatorioExtracao)> {
    let paginas = fonte.paginas();
    let mut rel = RelatorioExtracao { paginas: paginas.len(), ..Default::default() };
    let mut candidatas = Vec::new();
    let mut carregado: Option<u8> = None;

    for pagina in paginas {
        let marcadores = localizar_marcadores(pagina);
        rel.marcadores += marcadores.len();
        rel.tabelas += pagina.tabelas.len();

        let (linhas, novo) = resolver_pagina(carregado, &marcadores, &pagina.tabelas);
        carregado = novo;

        for resolvida in linhas {
            rel.linhas += 1;
            match classificar_linha(&resolvida.linha, resolvida.periodo, colunas) {
                ClassificacaoLinha::Aceita(d) => {
                    log::trace!("aceita {} (período {:?})", d.codigo, d.periodo);
                    rel.aceitas += 1;
                    candidatas.push(d);
                }
                ClassificacaoLinha::IgnoradaCabecalho => rel.cabecalhos += 1,
                ClassificacaoLinha::IgnoradaMalformada(cod) => {
                    log::debug!("página {:?}: código malformado {:?} ignorado", pagina.numero, cod);
                    rel.malformadas += 1;
                }
            }
        }
    }

    if rel.tabelas == 0 {
        return Err(MatrizError::Estrutural(format!(
            "nenhuma tabela encontrada em {} páginas; o documento não parece uma matriz curricular",
            rel.paginas
        )));
    }

    let disciplinas = deduplicar(candidatas);
    rel.duplicadas = rel.aceitas - disciplinas.len();

    if disciplinas.is_empty() {
        log::warn!("⚠️  {} tabelas lidas mas nenhuma disciplina válida", rel.tabelas);
    }

    let curriculo = Curriculo { disciplinas, metadados: extrair_metadados(paginas) };
    Ok((curriculo, rel))
}
