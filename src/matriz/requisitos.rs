use regex::Regex;
use std::sync::OnceLock;

use crate::matriz::codigo::PADRAO_CODIGO;

fn re_anotacao() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // [<período ou "Não Periodizada"> - <CÓDIGO>], não-guloso por colchete
    RE.get_or_init(|| {
        Regex::new(&format!(r"\[[^\[\]]*?-\s*({})\s*\]", PADRAO_CODIGO)).expect("regex de requisito inválida")
    })
}

/// Códigos referenciados nas anotações `[<período> - <CÓDIGO>]` de uma célula.
///
/// Ordem da primeira aparição, sem repetidos. Célula vazia ou ausente => vazio.
/// Serve tanto para a coluna de pré-requisitos quanto para a de co-requisitos,
/// mas cada chamada olha uma célula só.
pub fn extrair_requisitos(celula: Option<&str>) -> Vec<String> {
    let Some(texto) = celula else { return Vec::new() };

    let mut codigos: Vec<String> = Vec::new();
    for caps in re_anotacao().captures_iter(texto) {
        let codigo = &caps[1];
        if !codigos.iter().any(|c| c == codigo) {
            codigos.push(codigo.to_string());
        }
    }
    codigos
}
