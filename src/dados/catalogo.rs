use std::path::Path;

use crate::dados::io::{escrever_json_atomico, ler_json};
use crate::error::Result;
use crate::models::EntradaCatalogo;

pub fn ler_catalogo(path: &Path) -> Result<Vec<EntradaCatalogo>> {
    let entradas: Vec<EntradaCatalogo> = ler_json(path)?;
    log::info!("📖 {} ofertas lidas de {}", entradas.len(), path.display());
    Ok(entradas)
}

pub fn salvar_catalogo(path: &Path, entradas: &[EntradaCatalogo]) -> Result<()> {
    escrever_json_atomico(path, &entradas)
}
