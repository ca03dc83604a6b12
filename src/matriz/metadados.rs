//! Metadados do currículo lidos do cabeçalho do documento (best-effort).

use regex::Regex;
use std::sync::OnceLock;

use crate::layout::Pagina;
use crate::matriz::normalizacao::{colapsar_espacos, normalizar};
use crate::models::Metadados;

/// Só as primeiras páginas trazem o cabeçalho do currículo
const PAGINAS_CABECALHO: usize = 2;

const ROTULOS_FACULDADE: &[&str] = &["faculdade", "instituto", "escola", "curso"];

// número: "3000" ou "3.000" (que vira "3 000" depois de normalizar)
const NUMERO: &str = r"(\d{1,3}(?: \d{3})+|\d+)";

fn re_curriculo() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bcurriculo (?:no |n o |numero |num )?(\d{3,})\b").expect("regex inválida"))
}

fn re_carga_total() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"\bcarga horaria total (?:de )?{}", NUMERO)).expect("regex inválida"))
}

fn re_horas_obrigatorias() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\b(?:carga horaria|horas|ch) obrigatori\w* (?:de )?{}", NUMERO)).expect("regex inválida")
    })
}

fn numero(re: &Regex, texto: &str) -> Option<u32> {
    let caps = re.captures(texto)?;
    caps[1].replace(' ', "").parse::<u32>().ok()
}

fn nome_faculdade(texto: &str) -> Option<String> {
    texto
        .lines()
        .map(colapsar_espacos)
        .find(|linha| {
            let norm = normalizar(linha);
            norm.split(' ').any(|palavra| ROTULOS_FACULDADE.contains(&palavra))
        })
}

/// Lê faculdade, número do currículo e cargas horárias das primeiras páginas.
/// O que não for achado fica `None`.
pub fn extrair_metadados(paginas: &[Pagina]) -> Metadados {
    let brutos: Vec<String> = paginas.iter().take(PAGINAS_CABECALHO).map(|p| p.texto_completo()).collect();
    let bruto = brutos.join("\n");
    let norm = normalizar(&bruto);

    Metadados {
        nome_faculdade: nome_faculdade(&bruto),
        numero_curriculo: re_curriculo().captures(&norm).map(|c| c[1].to_string()),
        horas_obrigatorias: numero(re_horas_obrigatorias(), &norm),
        carga_horaria_total: numero(re_carga_total(), &norm),
    }
}
