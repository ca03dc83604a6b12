use std::collections::HashMap;

use crate::models::Disciplina;

/// Mantém só a primeira ocorrência de cada código, na ordem de leitura.
///
/// Uma disciplina pode se repetir (linha quebrada entre páginas). A primeira
/// vence inteira: não há merge campo a campo, mesmo que a repetição traga
/// valores diferentes. Diferenças são registradas em warn.
pub fn deduplicar(candidatas: Vec<Disciplina>) -> Vec<Disciplina> {
    let mut vistos: HashMap<String, usize> = HashMap::new();
    let mut unicas: Vec<Disciplina> = Vec::with_capacity(candidatas.len());

    for d in candidatas {
        match vistos.get(&d.codigo) {
            Some(&idx) => {
                if unicas[idx] != d {
                    log::warn!("{} repetida com campos diferentes; mantida a primeira ocorrência", d.codigo);
                }
            }
            None => {
                vistos.insert(d.codigo.clone(), unicas.len());
                unicas.push(d);
            }
        }
    }
    unicas
}
