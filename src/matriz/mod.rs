//! Módulo `matriz`: da tabela posicional ao conjunto de disciplinas.
//!
//! Submódulos:
//! - `codigo`: validador de código de disciplina
//! - `requisitos`: extração de pré/co-requisitos das anotações `[p - COD]`
//! - `normalizacao`: normalização de texto e detecção de títulos de período
//! - `marcadores`: títulos de período ancorados em posição vertical
//! - `linhas`: posição, período e classificação de cada linha de tabela
//! - `dedup`: primeira ocorrência de cada código
//! - `metadados`: faculdade, currículo e cargas horárias
//! - `extrator`: orquestra a extração página a página
//! - `gerado`: importação de matriz gerada externamente

pub mod codigo;
pub mod requisitos;
pub mod normalizacao;
pub mod marcadores;
pub mod linhas;
pub mod dedup;
pub mod metadados;
pub mod extrator;
pub mod gerado;

pub use codigo::codigo_valido;
pub use dedup::deduplicar;
pub use extrator::{RelatorioExtracao, extrair_curriculo};
pub use gerado::importar_gerado;
pub use linhas::{ClassificacaoLinha, LinhaResolvida, classificar_linha, resolver_pagina};
pub use marcadores::localizar_marcadores;
pub use requisitos::extrair_requisitos;
