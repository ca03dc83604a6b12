// Biblioteca raiz do crate `matrizshift`.
// Extrai a matriz curricular de um dump de layout paginado e enriquece o
// catálogo de ofertas raspado com período, tipo e requisitos.
pub mod config;
pub mod dados;
pub mod enriquecimento;
pub mod error;
pub mod grafo;
pub mod layout;
pub mod matriz;
pub mod models;
pub mod pipeline;

pub use error::{MatrizError, Result};
pub use pipeline::{executar_enriquecimento, executar_extracao, executar_importacao};
