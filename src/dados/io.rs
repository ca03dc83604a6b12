use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{MatrizError, Result};

/// Lê e desserializa um arquivo JSON inteiro.
/// Arquivo ausente vira `NaoEncontrado`, não um erro de E/S genérico.
pub fn ler_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(MatrizError::NaoEncontrado { path: path.to_path_buf() });
    }
    let raw = fs::read_to_string(path).map_err(|source| MatrizError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| MatrizError::Json { path: path.to_path_buf(), source })
}

/// Serializa com indentação de 2 espaços e newline final.
pub fn para_json<T: Serialize>(valor: &T) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(valor)?;
    out.push('\n');
    Ok(out)
}

/// Substitui o arquivo inteiro: escreve `<path>.tmp` e renomeia por cima.
pub fn escrever_json_atomico<T: Serialize>(path: &Path, valor: &T) -> Result<()> {
    let conteudo = para_json(valor).map_err(|source| MatrizError::Json { path: path.to_path_buf(), source })?;
    let io_err = |source: std::io::Error| MatrizError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, conteudo).map_err(io_err)?;
    fs::rename(&tmp_path, path).map_err(io_err)?;
    Ok(())
}
