//! Primitiva de layout: páginas com palavras posicionadas e tabelas detectadas.
//!
//! O crate não lê PDF. Espera um dump JSON gerado por qualquer ferramenta de
//! extração de tabelas (pdfplumber, pdfium...) com o formato:
//!
//! ```text
//! { "paginas": [ { "numero": 1, "texto": "...",
//!     "palavras": [ { "texto": "1º", "x0": 40.0, "x1": 52.0, "top": 110.5, "bottom": 120.0 } ],
//!     "tabelas":  [ { "bbox": [30.0, 130.0, 560.0, 700.0],
//!                     "linhas": [ ["ECO00101", "MICROECONOMIA I", "OB", null, null] ] } ] } ] }
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::dados::io::ler_json;
use crate::error::Result;

/// Palavra posicionada (coordenadas em pontos, `top` cresce para baixo)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Palavra {
    pub texto: String,
    #[serde(default)]
    pub x0: f64,
    #[serde(default)]
    pub x1: f64,
    pub top: f64,
    #[serde(default)]
    pub bottom: f64,
}

impl Palavra {
    pub fn new(texto: &str, top: f64) -> Self {
        Palavra { texto: texto.to_string(), x0: 0.0, x1: 0.0, top, bottom: top }
    }
}

/// Tabela detectada. `bbox = [x0, top, x1, bottom]`.
///
/// A primitiva não expõe a posição de cada linha, só a caixa da tabela.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tabela {
    pub bbox: [f64; 4],
    #[serde(default)]
    pub linhas: Vec<Vec<Option<String>>>,
}

impl Tabela {
    pub fn top(&self) -> f64 {
        self.bbox[1]
    }

    pub fn bottom(&self) -> f64 {
        self.bbox[3]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagina {
    #[serde(default)]
    pub numero: Option<u32>,
    #[serde(default)]
    pub texto: Option<String>,
    #[serde(default)]
    pub palavras: Vec<Palavra>,
    #[serde(default)]
    pub tabelas: Vec<Tabela>,
}

impl Pagina {
    /// Texto corrido da página; sem `texto` no dump, junta as palavras.
    pub fn texto_completo(&self) -> String {
        match &self.texto {
            Some(t) => t.clone(),
            None => self.palavras.iter().map(|p| p.texto.as_str()).collect::<Vec<_>>().join(" "),
        }
    }
}

/// Fonte de páginas já posicionadas, em ordem de leitura.
pub trait FonteLayout {
    fn paginas(&self) -> &[Pagina];
}

/// Documento carregado de um dump JSON
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Documento {
    #[serde(default)]
    pub paginas: Vec<Pagina>,
}

impl Documento {
    pub fn carregar(path: &Path) -> Result<Documento> {
        let doc: Documento = ler_json(path)?;
        log::info!("📖 {} páginas lidas de {}", doc.paginas.len(), path.display());
        Ok(doc)
    }
}

impl FonteLayout for Documento {
    fn paginas(&self) -> &[Pagina] {
        &self.paginas
    }
}
