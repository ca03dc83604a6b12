use regex::Regex;
use std::sync::OnceLock;

/// Forma de um código de disciplina: 2-3 letras maiúsculas + 5 dígitos.
pub const PADRAO_CODIGO: &str = "[A-Z]{2,3}[0-9]{5}";

fn re_codigo() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", PADRAO_CODIGO)).expect("regex de código inválida"))
}

/// `true` sse a string inteira é um código de disciplina (ex: `ECO00101`).
///
/// Não faz trim nem aceita minúsculas; quem chama apara a célula antes.
pub fn codigo_valido(s: &str) -> bool {
    re_codigo().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_codigos_bem_formados() {
        assert!(codigo_valido("ECO00101"));
        assert!(codigo_valido("MAT10203"));
        assert!(codigo_valido("GE12345"));
    }

    #[test]
    fn rejeita_o_resto() {
        for s in ["eco00101", "ECO0010", "ECO001011", "", "ECO 00101", "E00101", "ECON00101", " ECO00101", "ECO00101\n"] {
            assert!(!codigo_valido(s), "deveria rejeitar {:?}", s);
        }
    }
}
