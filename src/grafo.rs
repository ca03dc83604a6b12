use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap};

use crate::models::Curriculo;

/// Diagnóstico do grafo de pré-requisitos. Nada aqui é fatal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticoGrafo {
    /// `(disciplina, requisito)` onde o requisito não está na matriz
    pub referencias_ausentes: Vec<(String, String)>,
    /// Grupos de disciplinas que dependem umas das outras
    pub ciclos: Vec<Vec<String>>,
    /// Maior cadeia de pré-requisitos até cada disciplina (0 = sem requisito).
    /// Vazio se houver ciclo.
    pub profundidade: BTreeMap<String, usize>,
}

/// Constrói o grafo requisito -> disciplina e verifica referências e ciclos.
///
/// Co-requisitos só entram na verificação de referências: são mútuos por
/// natureza e formariam ciclos falsos.
pub fn diagnosticar(curriculo: &Curriculo) -> DiagnosticoGrafo {
    let mut grafo: DiGraph<&str, ()> = DiGraph::new();
    let mut nos: HashMap<&str, NodeIndex> = HashMap::new();

    for d in &curriculo.disciplinas {
        let idx = grafo.add_node(d.codigo.as_str());
        nos.insert(d.codigo.as_str(), idx);
    }

    let mut diag = DiagnosticoGrafo::default();

    for d in &curriculo.disciplinas {
        let destino = nos[d.codigo.as_str()];
        for req in &d.prerequisitos {
            match nos.get(req.as_str()) {
                Some(&origem) => {
                    if grafo.find_edge(origem, destino).is_none() {
                        grafo.add_edge(origem, destino, ());
                    }
                }
                None => diag.referencias_ausentes.push((d.codigo.clone(), req.clone())),
            }
        }
        for co in &d.corequisitos {
            if !nos.contains_key(co.as_str()) {
                diag.referencias_ausentes.push((d.codigo.clone(), co.clone()));
            }
        }
    }

    for componente in tarjan_scc(&grafo) {
        let auto_laco = componente.len() == 1 && grafo.find_edge(componente[0], componente[0]).is_some();
        if componente.len() > 1 || auto_laco {
            let mut codigos: Vec<String> = componente.iter().map(|&i| grafo[i].to_string()).collect();
            codigos.sort();
            diag.ciclos.push(codigos);
        }
    }
    diag.ciclos.sort();

    if diag.ciclos.is_empty() {
        if let Ok(ordem) = toposort(&grafo, None) {
            let mut prof: HashMap<NodeIndex, usize> = HashMap::new();
            for no in ordem {
                let p = grafo
                    .neighbors_directed(no, Direction::Incoming)
                    .map(|anterior| prof.get(&anterior).copied().unwrap_or(0) + 1)
                    .max()
                    .unwrap_or(0);
                prof.insert(no, p);
                diag.profundidade.insert(grafo[no].to_string(), p);
            }
        }
    }

    diag
}

/// Registra o diagnóstico no log (warn para problemas, info para o resumo).
pub fn registrar(diag: &DiagnosticoGrafo) {
    for (disciplina, requisito) in &diag.referencias_ausentes {
        log::warn!("⚠️  {} exige {} que não está na matriz", disciplina, requisito);
    }
    for ciclo in &diag.ciclos {
        log::warn!("⚠️  ciclo de pré-requisitos: {}", ciclo.join(" -> "));
    }
    if let Some(max) = diag.profundidade.values().max() {
        log::info!("cadeia de pré-requisitos mais longa: {} níveis", max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Disciplina, TipoDisciplina};

    fn disc(codigo: &str, pre: &[&str]) -> Disciplina {
        Disciplina {
            codigo: codigo.to_string(),
            nome: String::new(),
            periodo: Some(1),
            tipo: TipoDisciplina::Obrigatoria,
            prerequisitos: pre.iter().map(|s| s.to_string()).collect(),
            corequisitos: Vec::new(),
        }
    }

    #[test]
    fn profundidade_em_cadeia() {
        let c = Curriculo {
            disciplinas: vec![disc("ECO00001", &[]), disc("ECO00002", &["ECO00001"]), disc("ECO00003", &["ECO00002", "ECO00001"])],
            ..Default::default()
        };
        let d = diagnosticar(&c);
        assert!(d.ciclos.is_empty());
        assert!(d.referencias_ausentes.is_empty());
        assert_eq!(d.profundidade["ECO00001"], 0);
        assert_eq!(d.profundidade["ECO00002"], 1);
        assert_eq!(d.profundidade["ECO00003"], 2);
    }

    #[test]
    fn detecta_ciclo_e_referencia_ausente() {
        let c = Curriculo {
            disciplinas: vec![disc("ECO00001", &["ECO00002"]), disc("ECO00002", &["ECO00001", "MAT99999"])],
            ..Default::default()
        };
        let d = diagnosticar(&c);
        assert_eq!(d.ciclos, vec![vec!["ECO00001".to_string(), "ECO00002".to_string()]]);
        assert_eq!(d.referencias_ausentes, vec![("ECO00002".to_string(), "MAT99999".to_string())]);
        assert!(d.profundidade.is_empty());
    }
}
