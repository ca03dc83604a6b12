//! Orquestração das três ferramentas: extrair, enriquecer e importar.
//!
//! Cada função lê tudo para memória, processa e substitui o arquivo de saída
//! de uma vez. Se uma entrada obrigatória falta, nada é escrito.

use std::fs;
use std::path::Path;

use crate::config::ColunasMatriz;
use crate::dados::{ler_catalogo, ler_curriculo, salvar_catalogo, salvar_curriculo};
use crate::enriquecimento::{ResumoEnriquecimento, Sugestao, carregar_equivalencias, enriquecer, sugerir_equivalencias};
use crate::error::{MatrizError, Result};
use crate::grafo;
use crate::layout::Documento;
use crate::matriz::{RelatorioExtracao, extrair_curriculo, importar_gerado};
use crate::models::Curriculo;

/// Resumo legível do currículo (o que a CLI imprime depois de extrair)
pub fn resumo_curriculo(curriculo: &Curriculo) -> String {
    fn ou_interrogacao<T: ToString>(v: &Option<T>) -> String {
        v.as_ref().map(|x| x.to_string()).unwrap_or_else(|| "?".to_string())
    }
    let (obr, opt) = curriculo.contar_por_tipo();
    let m = &curriculo.metadados;
    format!(
        "  Faculdade : {}\n  Currículo : {}\n  CH Total  : {}h\n  CH Obrig. : {}h\n  Disciplinas: {} ({} obrig., {} opt.)",
        ou_interrogacao(&m.nome_faculdade),
        ou_interrogacao(&m.numero_curriculo),
        ou_interrogacao(&m.carga_horaria_total),
        ou_interrogacao(&m.horas_obrigatorias),
        curriculo.disciplinas.len(),
        obr,
        opt
    )
}

/// Dump de layout -> arquivo da matriz.
pub fn executar_extracao(layout: &Path, saida: &Path, colunas: &ColunasMatriz) -> Result<(Curriculo, RelatorioExtracao)> {
    log::info!("📖 Lendo {}...", layout.display());
    let documento = Documento::carregar(layout)?;

    let (curriculo, relatorio) = extrair_curriculo(&documento, colunas)?;
    log::info!("{}", relatorio);

    grafo::registrar(&grafo::diagnosticar(&curriculo));

    salvar_curriculo(saida, &curriculo)?;
    log::info!("✅ {} disciplinas -> {}", curriculo.disciplinas.len(), saida.display());
    Ok((curriculo, relatorio))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultadoEnriquecimento {
    pub resumo: ResumoEnriquecimento,
    pub sugestoes: Vec<Sugestao>,
}

/// Catálogo + matriz (+ equivalências opcionais) -> catálogo enriquecido.
pub fn executar_enriquecimento(
    catalogo: &Path,
    curriculo: &Path,
    equivalencias: &Path,
    saida: &Path,
) -> Result<ResultadoEnriquecimento> {
    log::info!("📖 Lendo {}...", catalogo.display());
    let mut entradas = ler_catalogo(catalogo)?;

    log::info!("📖 Lendo {}...", curriculo.display());
    let curriculo = ler_curriculo(curriculo)?;

    let equivalencias = carregar_equivalencias(equivalencias)?;

    let resumo = enriquecer(&mut entradas, &curriculo, &equivalencias);
    let sugestoes = sugerir_equivalencias(&entradas, &curriculo, &equivalencias);

    salvar_catalogo(saida, &entradas)?;
    log::info!("✅ {}", resumo);
    log::info!("Salvo em {}", saida.display());
    Ok(ResultadoEnriquecimento { resumo, sugestoes })
}

/// JSON gerado externamente -> arquivo da matriz validado.
pub fn executar_importacao(entrada: &Path, saida: &Path) -> Result<Curriculo> {
    if !entrada.is_file() {
        return Err(MatrizError::NaoEncontrado { path: entrada.to_path_buf() });
    }
    let raw = fs::read_to_string(entrada).map_err(|source| MatrizError::Io { path: entrada.to_path_buf(), source })?;

    let curriculo = importar_gerado(&raw)?;
    grafo::registrar(&grafo::diagnosticar(&curriculo));

    salvar_curriculo(saida, &curriculo)?;
    log::info!("✅ {} disciplinas -> {}", curriculo.disciplinas.len(), saida.display());
    Ok(curriculo)
}
