//! Resolução de linhas de tabela: posição estimada, período e classificação.
//!
//! A primitiva de layout só dá a caixa da tabela, então a posição de cada
//! linha é interpolada. O período de uma linha é o do último título impresso
//! acima dela, talvez numa página anterior: esse valor atravessa as páginas
//! como acumulador explícito (`resolver_pagina` é um passo do fold).

use crate::config::ColunasMatriz;
use crate::layout::Tabela;
use crate::matriz::codigo::codigo_valido;
use crate::matriz::normalizacao::{colapsar_espacos, normalizar};
use crate::matriz::requisitos::extrair_requisitos;
use crate::models::{Disciplina, LinhaTabela, MarcadorPeriodo, TipoDisciplina};

/// Linha com o período já atribuído
#[derive(Debug, Clone, PartialEq)]
pub struct LinhaResolvida {
    pub linha: LinhaTabela,
    pub periodo: Option<u8>,
}

/// O que fazer com uma linha da tabela
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificacaoLinha {
    Aceita(Disciplina),
    /// Primeira célula vazia ou sem dígitos: cabeçalho, linha em branco ou
    /// continuação do nome da linha anterior
    IgnoradaCabecalho,
    /// Tem cara de código mas não passa no validador
    IgnoradaMalformada(String),
}

/// `top = tabela_top + idx * (tabela_bottom - tabela_top) / n_linhas`
pub fn linhas_da_tabela(tabela: &Tabela) -> Vec<LinhaTabela> {
    let n = tabela.linhas.len();
    if n == 0 {
        return Vec::new();
    }
    let passo = (tabela.bottom() - tabela.top()) / n as f64;
    tabela
        .linhas
        .iter()
        .enumerate()
        .map(|(idx, celulas)| LinhaTabela {
            celulas: celulas.clone(),
            top: tabela.top() + idx as f64 * passo,
        })
        .collect()
}

/// Período da linha em `top`: último marcador (ordenado) com `top <= linha`,
/// senão o período carregado das páginas anteriores.
pub fn periodo_da_linha(top: f64, marcadores: &[MarcadorPeriodo], carregado: Option<u8>) -> Option<u8> {
    marcadores
        .iter()
        .rev()
        .find(|m| m.top <= top)
        .map(|m| m.periodo)
        .unwrap_or(carregado)
}

/// Um passo do fold por página: `(carregado, marcadores, tabelas) ->
/// (linhas com período, novo carregado)`.
///
/// O novo carregado é o período do último marcador da página (por posição);
/// página sem marcadores mantém o anterior, então páginas só de continuação
/// não zeram o período.
pub fn resolver_pagina(
    carregado: Option<u8>,
    marcadores: &[MarcadorPeriodo],
    tabelas: &[Tabela],
) -> (Vec<LinhaResolvida>, Option<u8>) {
    let mut resolvidas = Vec::new();
    for tabela in tabelas {
        for linha in linhas_da_tabela(tabela) {
            let periodo = periodo_da_linha(linha.top, marcadores, carregado);
            resolvidas.push(LinhaResolvida { linha, periodo });
        }
    }

    let novo = match marcadores.last() {
        Some(m) => m.periodo,
        None => carregado,
    };
    (resolvidas, novo)
}

fn tipo_da_celula(celula: Option<&str>) -> Option<TipoDisciplina> {
    match normalizar(celula?).as_str() {
        "ob" | "obr" | "obrigatoria" | "obrigatorio" => Some(TipoDisciplina::Obrigatoria),
        "op" | "opt" | "optativa" | "optativo" | "eletiva" => Some(TipoDisciplina::Optativa),
        _ => None,
    }
}

/// Filtra e converte uma linha. Não é erro ignorar linhas: cabeçalhos e
/// linhas em branco são ruído esperado.
pub fn classificar_linha(linha: &LinhaTabela, periodo: Option<u8>, colunas: &ColunasMatriz) -> ClassificacaoLinha {
    let codigo = linha.celula(colunas.codigo).map(str::trim).unwrap_or("");
    if codigo.is_empty() || !codigo.chars().any(|c| c.is_ascii_digit()) {
        return ClassificacaoLinha::IgnoradaCabecalho;
    }
    if !codigo_valido(codigo) {
        return ClassificacaoLinha::IgnoradaMalformada(codigo.to_string());
    }

    let nome = colapsar_espacos(linha.celula(colunas.nome).unwrap_or(""));
    let tipo = colunas
        .tipo
        .and_then(|c| tipo_da_celula(linha.celula(c)))
        .unwrap_or_else(|| TipoDisciplina::pelo_periodo(periodo));
    let prerequisitos = colunas.prerequisitos.map(|c| extrair_requisitos(linha.celula(c))).unwrap_or_default();
    let corequisitos = colunas.corequisitos.map(|c| extrair_requisitos(linha.celula(c))).unwrap_or_default();

    ClassificacaoLinha::Aceita(Disciplina {
        codigo: codigo.to_string(),
        nome,
        periodo,
        tipo,
        prerequisitos,
        corequisitos,
    })
}
