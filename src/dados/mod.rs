//! Módulo `dados`: leitura e escrita dos contratos JSON da fronteira.
//!
//! Submódulos:
//! - `io`: helpers de leitura/escrita atômica
//! - `curriculo`: arquivo da matriz curricular (envelope ou legado)
//! - `catalogo`: arquivo de ofertas do catálogo raspado

/// Helpers de E/S: `ler_json`, `escrever_json_atomico`
pub mod io;

/// Arquivo da matriz curricular
pub mod curriculo;

/// Arquivo do catálogo de ofertas
pub mod catalogo;

pub use catalogo::{ler_catalogo, salvar_catalogo};
pub use curriculo::{ArquivoCurriculo, ler_curriculo, salvar_curriculo};
