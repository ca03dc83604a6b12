//! Normalização de texto antes de qualquer detecção por padrão.
//!
//! Todo texto que passa por aqui sai em minúsculas ASCII, sem acentos, com
//! pontuação trocada por espaço e espaços colapsados. Assim "1º Período",
//! "1o. PERÍODO" e o mesmo título com mojibake (UTF-8 lido como latin-1) viram o
//! mesmo "1o periodo".

use regex::Regex;
use std::sync::OnceLock;

/// Pares de mojibake comuns (UTF-8 interpretado como latin-1/cp1252)
const MOJIBAKE: &[(&str, &str)] = &[
    ("\u{c3}\u{a1}", "á"), ("\u{c3}\u{a2}", "â"), ("\u{c3}\u{a3}", "ã"), ("\u{c3}\u{a0}", "à"),
    ("\u{c3}\u{a9}", "é"), ("\u{c3}\u{aa}", "ê"),
    ("\u{c3}\u{ad}", "í"), ("\u{c3}\u{8d}", "Í"),
    ("\u{c3}\u{b3}", "ó"), ("\u{c3}\u{b4}", "ô"), ("\u{c3}\u{b5}", "õ"),
    ("\u{c3}\u{ba}", "ú"), ("\u{c3}\u{bc}", "ü"),
    ("\u{c3}\u{a7}", "ç"), ("\u{c3}\u{2021}", "Ç"),
    ("\u{c3}\u{192}", "Ã"), ("\u{c3}\u{2022}", "Õ"), ("\u{c3}\u{2030}", "É"),
    ("\u{c3}\u{201c}", "Ó"), ("\u{c3}\u{161}", "Ú"),
    ("\u{c2}\u{ba}", "º"), ("\u{c2}\u{aa}", "ª"), ("\u{c2}\u{b0}", "°"),
];

/// Negações que precedem "periodizada" (ou "periodized") num título de seção
/// de eletivas. "n o" cobre "N?o" e "N\u{FFFD}o" depois que a pontuação vira espaço.
const NEGACOES: &[&str] = &["nao", "n o", "non", "sem"];

fn desfazer_mojibake(s: &str) -> String {
    if !s.contains('Ã') && !s.contains('Â') {
        return s.to_string();
    }
    let mut out = s.to_string();
    for (quebrado, certo) in MOJIBAKE {
        out = out.replace(quebrado, certo);
    }
    out
}

/// Normaliza um texto: minúsculas, sem acentos, indicadores ordinais viram
/// letra (`º` -> `o`, `ª` -> `a`), pontuação vira espaço, espaços colapsados.
pub fn normalizar(s: &str) -> String {
    let s = desfazer_mojibake(s);
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'Ã' | 'á' | 'à' | 'ä' | 'â' | 'ã' | 'ª' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' | 'ó' | 'ò' | 'ö' | 'ô' | 'õ' | 'º' | '°' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            'Ç' | 'ç' => 'c',
            other => other,
        };

        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            // pontuação, símbolos e qualquer resto não-ASCII -> espaço
            out.push(' ');
        }
    }

    colapsar_espacos(&out)
}

/// Junta quebras de linha e sequências de espaço num espaço só.
pub fn colapsar_espacos(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn padrao_titulo() -> String {
    let negacoes = NEGACOES.join("|");
    // "periodo" ou "period" (matrizes em inglês: "1st Period", "Non-periodized")
    format!(r"\b(?:(10|[1-9]) ?(?:o|a|st|nd|rd|th)? periodo?\b|(?:{}) periodiz(?:ad|ed))", negacoes)
}

fn re_titulo() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&padrao_titulo()).expect("regex de título inválida"))
}

fn re_titulo_inicio() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}", padrao_titulo())).expect("regex de título inválida"))
}

fn re_colchetes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]").expect("regex de colchetes inválida"))
}

fn periodo_da_captura(caps: &regex::Captures<'_>) -> Option<u8> {
    caps.get(1).and_then(|m| m.as_str().parse::<u8>().ok())
}

/// Títulos de seção presentes num texto, na ordem de leitura.
///
/// `Some(n)` para "nº período", `None` para "não periodizada". Anotações entre
/// colchetes (células de pré-requisito como `[Não Periodizada - MAT00020]`)
/// não contam como título.
pub fn titulos_no_texto(texto: &str) -> Vec<Option<u8>> {
    let sem_anotacoes = re_colchetes().replace_all(texto, " ");
    let norm = normalizar(&sem_anotacoes);
    re_titulo().captures_iter(&norm).map(|caps| periodo_da_captura(&caps)).collect()
}

/// Se o fragmento começa com um título de seção, devolve o período dele.
pub fn titulo_no_inicio(fragmento: &str) -> Option<Option<u8>> {
    let norm = normalizar(fragmento);
    re_titulo_inicio().captures(&norm).map(|caps| periodo_da_captura(&caps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_acentos_e_ordinais() {
        assert_eq!(normalizar("1º  Período"), "1o periodo");
        assert_eq!(normalizar("2ª\nPERÍODO"), "2a periodo");
        assert_eq!(normalizar("Não-Periodizadas"), "nao periodizadas");
    }

    #[test]
    fn desfaz_mojibake() {
        assert_eq!(normalizar("N\u{c3}\u{a3}o Periodizada"), "nao periodizada");
        assert_eq!(normalizar("3\u{c2}\u{ba} Per\u{c3}\u{ad}odo"), "3o periodo");
    }

    #[test]
    fn detecta_titulos_em_ordem() {
        let texto = "MATRIZ CURRICULAR\n1º Período\nECO00101 MICRO\n10º Período\nNão Periodizadas";
        assert_eq!(titulos_no_texto(texto), vec![Some(1), Some(10), None]);
    }

    #[test]
    fn ignora_titulos_dentro_de_colchetes() {
        let texto = "2º Período ECO00200 [Não Periodizada - MAT00020][3 - ECO00050]";
        assert_eq!(titulos_no_texto(texto), vec![Some(2)]);
    }

    #[test]
    fn variantes_de_nao_periodizada() {
        for t in ["Não Periodizadas", "NAO PERIODIZADA", "N?o Periodizada", "N\u{FFFD}o periodizadas", "Non periodizada"] {
            assert_eq!(titulos_no_texto(t), vec![None], "falhou para {:?}", t);
        }
    }

    #[test]
    fn titulos_em_ingles() {
        assert_eq!(titulos_no_texto("1st Period\n2nd Period\n3rd Period\n4th Period"), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(titulos_no_texto("Non-periodized"), vec![None]);
        assert_eq!(titulo_no_inicio("10th Period"), Some(Some(10)));
    }

    #[test]
    fn nao_aceita_periodo_fora_da_faixa() {
        assert!(titulos_no_texto("11º Período").is_empty());
        assert!(titulos_no_texto("Período letivo").is_empty());
    }

    #[test]
    fn titulo_no_inicio_exige_ancora() {
        assert_eq!(titulo_no_inicio("3º Período"), Some(Some(3)));
        assert_eq!(titulo_no_inicio("Disciplinas do 3º Período"), None);
        assert_eq!(titulo_no_inicio("Não Periodizadas"), Some(None));
    }
}
