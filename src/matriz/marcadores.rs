//! Localizador de títulos de período numa página.
//!
//! Os títulos ("1º Período", "Não Periodizadas") não são colunas da tabela,
//! só texto impresso acima do bloco de disciplinas. Detectamos no texto
//! corrido e ancoramos cada título numa palavra posicionada para saber o
//! `top` dele.

use crate::layout::{Pagina, Palavra};
use crate::matriz::normalizacao::{titulo_no_inicio, titulos_no_texto};
use crate::models::MarcadorPeriodo;

/// Máximo de palavras que um título ocupa ("1", "º", "Período")
const JANELA_TITULO: usize = 3;

/// Candidatos a título entre as palavras posicionadas, na ordem das palavras.
/// Palavras dentro de anotações `[...]` ficam de fora.
fn candidatos(palavras: &[Palavra]) -> Vec<(usize, Option<u8>)> {
    let mut fora_de_colchete = Vec::with_capacity(palavras.len());
    let mut profundidade: i32 = 0;
    for p in palavras {
        let abre = p.texto.matches('[').count() as i32;
        let fecha = p.texto.matches(']').count() as i32;
        fora_de_colchete.push(profundidade == 0 && abre == 0);
        profundidade = (profundidade + abre - fecha).max(0);
    }

    let mut out = Vec::new();
    for i in 0..palavras.len() {
        if !fora_de_colchete[i] {
            continue;
        }
        let fim = (i + JANELA_TITULO).min(palavras.len());
        let fragmento = palavras[i..fim]
            .iter()
            .zip(&fora_de_colchete[i..fim])
            .take_while(|(_, fora)| **fora)
            .map(|(p, _)| p.texto.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(periodo) = titulo_no_inicio(&fragmento) {
            out.push((i, periodo));
        }
    }
    out
}

/// Marcadores de período da página, ordenados por `top` crescente.
///
/// Cada título achado no texto consome a primeira palavra candidata ainda
/// livre com o mesmo período. Título sem palavra correspondente é descartado:
/// sem posição ele não serve para atribuir linhas.
pub fn localizar_marcadores(pagina: &Pagina) -> Vec<MarcadorPeriodo> {
    let titulos = titulos_no_texto(&pagina.texto_completo());
    if titulos.is_empty() {
        return Vec::new();
    }

    let mut livres = candidatos(&pagina.palavras);
    let mut marcadores = Vec::with_capacity(titulos.len());

    for periodo in titulos {
        match livres.iter().position(|(_, p)| *p == periodo) {
            Some(pos) => {
                let (idx, _) = livres.remove(pos);
                marcadores.push(MarcadorPeriodo { top: pagina.palavras[idx].top, periodo });
            }
            None => {
                log::debug!(
                    "página {:?}: título {:?} sem palavra posicionada, descartado",
                    pagina.numero,
                    periodo
                );
            }
        }
    }

    marcadores.sort_by(|a, b| a.top.total_cmp(&b.top));
    marcadores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagina(palavras: &[(&str, f64)]) -> Pagina {
        Pagina {
            numero: Some(1),
            texto: None,
            palavras: palavras.iter().map(|(t, y)| Palavra::new(t, *y)).collect(),
            tabelas: Vec::new(),
        }
    }

    #[test]
    fn ancora_titulos_e_ordena_por_posicao() {
        let p = pagina(&[
            ("2º", 300.0), ("Período", 300.0),
            ("1º", 40.0), ("Período", 40.0),
            ("Não", 600.0), ("Periodizadas", 600.0),
        ]);
        let m = localizar_marcadores(&p);
        assert_eq!(
            m,
            vec![
                MarcadorPeriodo { top: 40.0, periodo: Some(1) },
                MarcadorPeriodo { top: 300.0, periodo: Some(2) },
                MarcadorPeriodo { top: 600.0, periodo: None },
            ]
        );
    }

    #[test]
    fn titulo_sem_posicao_e_descartado() {
        let mut p = pagina(&[("3º", 100.0), ("Período", 100.0)]);
        p.texto = Some("3º Período\n4º Período".to_string());
        let m = localizar_marcadores(&p);
        assert_eq!(m, vec![MarcadorPeriodo { top: 100.0, periodo: Some(3) }]);
    }

    #[test]
    fn anotacoes_de_requisito_nao_viram_marcador() {
        let p = pagina(&[
            ("5º", 50.0), ("Período", 50.0),
            ("ECO00500", 80.0), ("[Não", 80.0), ("Periodizada", 80.0), ("-", 80.0), ("MAT00020]", 80.0),
        ]);
        let m = localizar_marcadores(&p);
        assert_eq!(m, vec![MarcadorPeriodo { top: 50.0, periodo: Some(5) }]);
    }

    #[test]
    fn pagina_sem_titulos() {
        let p = pagina(&[("ECO00101", 10.0), ("MICROECONOMIA", 10.0)]);
        assert!(localizar_marcadores(&p).is_empty());
    }
}
