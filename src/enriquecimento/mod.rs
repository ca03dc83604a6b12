//! Módulo `enriquecimento`: funde a matriz no catálogo de ofertas.
//!
//! Submódulos:
//! - `equivalencias`: carga do arquivo e resolução código do catálogo -> matriz
//! - `merge`: aplica os quatro campos de enriquecimento e conta os matches
//! - `sugestoes`: candidatos a equivalência por nome para os sem match

pub mod equivalencias;
pub mod merge;
pub mod sugestoes;

pub use equivalencias::{CHAVE_COMENTARIO, Equivalencias, Resolucao, carregar_equivalencias, resolver};
pub use merge::{ResumoEnriquecimento, enriquecer};
pub use sugestoes::{Sugestao, sugerir_equivalencias};
