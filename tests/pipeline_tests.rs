use matrizshift::config::ColunasMatriz;
use matrizshift::dados::{ler_curriculo, salvar_curriculo};
use matrizshift::{MatrizError, executar_enriquecimento, executar_extracao, executar_importacao};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn escrever(path: &Path, valor: &Value) {
    fs::write(path, serde_json::to_string_pretty(valor).unwrap()).unwrap();
}

fn ler(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_enriquecimento_ponta_a_ponta() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    let catalogo = dir.path().join("db_disciplinas.json");
    let equivalencias = dir.path().join("equivalencias.json");
    let saida = dir.path().join("saida.json");

    escrever(&curriculo, &json!([{ "codigo": "ECO00101", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [] }]));
    escrever(&catalogo, &json!([{ "codigo": "ECO00101", "turma": "A" }, { "codigo": "MAT00001", "turma": "A" }]));
    escrever(&equivalencias, &json!({}));

    let r = executar_enriquecimento(&catalogo, &curriculo, &equivalencias, &saida).expect("enriquecimento falhou");
    eprintln!("✅ {}", r.resumo);
    assert_eq!(r.resumo.diretos, 1);
    assert_eq!(r.resumo.sem_match, 1);

    let v = ler(&saida);
    assert_eq!(
        v[0],
        json!({ "codigo": "ECO00101", "turma": "A", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [], "corequisitos": [] })
    );
    assert_eq!(
        v[1],
        json!({ "codigo": "MAT00001", "turma": "A", "periodo": null, "tipo": "optativa", "prerequisitos": [], "corequisitos": [] })
    );
    // sem resto do arquivo temporário
    assert!(!saida.with_extension("tmp").exists());
}

#[test]
fn test_enriquecimento_idempotente() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    let catalogo = dir.path().join("db_disciplinas.json");
    let equivalencias = dir.path().join("equivalencias.json");

    escrever(
        &curriculo,
        &json!({
            "disciplinas": [
                { "codigo": "ECO00101", "nome": "MICROECONOMIA I", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [], "corequisitos": [] },
                { "codigo": "ECO00201", "nome": "MICROECONOMIA II", "periodo": 2, "tipo": "obrigatoria",
                  "prerequisitos": ["ECO00101"], "corequisitos": ["ECO00202"] }
            ],
            "nome_faculdade": "FACULDADE DE ECONOMIA"
        }),
    );
    escrever(
        &catalogo,
        &json!([
            { "codigo": "ECO00201", "turma": "A1", "nome": "MICROECONOMIA II", "professor": "FULANO", "ch": 60 },
            { "codigo": "GCO00101", "turma": "B1", "nome": "MICRO I (ANTIGA)" },
            { "codigo": "MAT00001", "turma": "U", "nome": "CÁLCULO I" }
        ]),
    );
    escrever(&equivalencias, &json!({ "_comentario": "renumeração 2020", "GCO00101": "ECO00101" }));

    // o default de saída reescreve o próprio catálogo
    executar_enriquecimento(&catalogo, &curriculo, &equivalencias, &catalogo).unwrap();
    let primeira = fs::read(&catalogo).unwrap();
    let r = executar_enriquecimento(&catalogo, &curriculo, &equivalencias, &catalogo).unwrap();
    let segunda = fs::read(&catalogo).unwrap();

    assert_eq!(primeira, segunda, "segunda passada mudou o arquivo");
    assert_eq!(r.resumo.via_equivalencia, 1);
    let v = ler(&catalogo);
    assert_eq!(v[0]["corequisitos"], json!(["ECO00202"]));
    assert_eq!(v[1]["periodo"], json!(1));
    assert_eq!(v[2]["periodo"], Value::Null);
}

#[test]
fn test_sem_arquivo_de_equivalencias() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    let catalogo = dir.path().join("db_disciplinas.json");
    let saida = dir.path().join("saida.json");

    escrever(&curriculo, &json!([{ "codigo": "ECO00101", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [] }]));
    escrever(&catalogo, &json!([{ "codigo": "ECO00101", "turma": "A" }]));

    let r = executar_enriquecimento(&catalogo, &curriculo, &dir.path().join("nao_existe.json"), &saida).unwrap();
    assert_eq!(r.resumo.diretos, 1);
    assert!(saida.exists());
}

#[test]
fn test_entrada_ausente_nao_escreve_nada() {
    let dir = tempdir().unwrap();
    let catalogo = dir.path().join("db_disciplinas.json");
    let saida = dir.path().join("saida.json");
    escrever(&catalogo, &json!([{ "codigo": "ECO00101", "turma": "A" }]));

    let err = executar_enriquecimento(&catalogo, &dir.path().join("sem_matriz.json"), &dir.path().join("eq.json"), &saida)
        .unwrap_err();
    eprintln!("✅ {}", err);
    assert!(matches!(err, MatrizError::NaoEncontrado { .. }));
    assert!(!saida.exists());

    let err = executar_extracao(&dir.path().join("sem_layout.json"), &saida, &ColunasMatriz::default()).unwrap_err();
    assert!(matches!(err, MatrizError::NaoEncontrado { .. }));
    assert!(!saida.exists());

    let err = executar_importacao(&dir.path().join("sem_gerado.json"), &saida).unwrap_err();
    assert!(matches!(err, MatrizError::NaoEncontrado { .. }));
    assert!(!saida.exists());
}

#[test]
fn test_layout_sem_tabelas_nao_gera_matriz_vazia() {
    let dir = tempdir().unwrap();
    let layout = dir.path().join("matriz_layout.json");
    let saida = dir.path().join("matriz_curricular.json");
    escrever(&layout, &json!({ "paginas": [ { "numero": 1, "texto": "Página de rosto" } ] }));

    let err = executar_extracao(&layout, &saida, &ColunasMatriz::default()).unwrap_err();
    assert!(matches!(err, MatrizError::Estrutural(_)));
    assert!(!saida.exists());
}

#[test]
fn test_extracao_escreve_envelope() {
    let dir = tempdir().unwrap();
    let layout = dir.path().join("matriz_layout.json");
    let saida = dir.path().join("sub").join("matriz_curricular.json");
    escrever(
        &layout,
        &json!({ "paginas": [ {
            "numero": 1,
            "texto": "FACULDADE DE ECONOMIA\n1º Período",
            "palavras": [ { "texto": "1º", "top": 10.0 }, { "texto": "Período", "top": 10.0 } ],
            "tabelas": [ { "bbox": [0.0, 20.0, 500.0, 60.0], "linhas": [
                ["ECO00101", "MICROECONOMIA I", "OB", null, null],
                ["ECO00102", "INTRODUÇÃO À ECONOMIA", "OB", null, null]
            ] } ]
        } ] }),
    );

    let (curriculo, rel) = executar_extracao(&layout, &saida, &ColunasMatriz::default()).unwrap();
    assert_eq!(rel.aceitas, 2);

    let v = ler(&saida);
    assert_eq!(v["nome_faculdade"], json!("FACULDADE DE ECONOMIA"));
    assert_eq!(v["disciplinas"][1]["nome"], json!("INTRODUÇÃO À ECONOMIA"));
    assert_eq!(v["disciplinas"][0]["periodo"], json!(1));
    assert!(v.get("numero_curriculo").is_none());

    assert_eq!(ler_curriculo(&saida).unwrap(), curriculo);
}

#[test]
fn test_importacao_valida_e_grava() {
    let dir = tempdir().unwrap();
    let entrada = dir.path().join("matriz_gerada.json");
    let saida = dir.path().join("matriz_curricular.json");
    fs::write(
        &entrada,
        "```json\n[{\"codigo\": \"ECO00101\", \"nome\": \"MICROECONOMIA I\", \"periodo\": 1, \"tipo\": \"obrigatoria\"}]\n```\n",
    )
    .unwrap();

    let c = executar_importacao(&entrada, &saida).unwrap();
    assert_eq!(c.disciplinas.len(), 1);
    assert_eq!(ler(&saida)["disciplinas"][0]["codigo"], json!("ECO00101"));

    fs::write(&entrada, "não é json").unwrap();
    let saida2 = dir.path().join("outra.json");
    assert!(matches!(executar_importacao(&entrada, &saida2), Err(MatrizError::Schema { .. })));
    assert!(!saida2.exists());
}

#[test]
fn test_curriculo_legado_e_envelope_iguais() {
    let dir = tempdir().unwrap();
    let legado = dir.path().join("legado.json");
    let envelope = dir.path().join("envelope.json");

    escrever(
        &legado,
        &json!([{ "codigo": "ECO00201", "nome": "MICROECONOMIA II", "periodo": 2, "tipo": "obrigatoria", "prerequisitos": ["ECO00101"] }]),
    );
    let c = ler_curriculo(&legado).unwrap();
    assert!(c.disciplinas[0].corequisitos.is_empty());
    assert_eq!(c.metadados, Default::default());

    salvar_curriculo(&envelope, &c).unwrap();
    let v = ler(&envelope);
    assert!(v.is_object());
    assert_eq!(v["disciplinas"][0]["corequisitos"], json!([]));
    assert_eq!(ler_curriculo(&envelope).unwrap(), c);
}

#[test]
fn test_json_quebrado_e_erro_de_json() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    fs::write(&curriculo, "{ \"disciplinas\": [ ").unwrap();
    assert!(matches!(ler_curriculo(&curriculo), Err(MatrizError::Json { .. })));
}

#[test]
fn test_curriculo_fora_do_formato_cita_disciplina_e_campo() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    escrever(
        &curriculo,
        &json!([
            { "codigo": "ECO00101", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [] },
            { "codigo": "ECO00102", "periodo": "dois", "tipo": "obrigatoria", "prerequisitos": [] }
        ]),
    );

    let err = ler_curriculo(&curriculo).unwrap_err();
    eprintln!("✅ {}", err);
    match &err {
        MatrizError::Formato { origem, motivo } => {
            assert!(origem.ends_with("matriz_curricular.json"));
            assert!(motivo.contains("[1] (ECO00102)"), "{}", motivo);
        }
        outro => panic!("esperava Formato, veio {:?}", outro),
    }
}

#[test]
fn test_turma_ausente_ou_nula_fica_como_veio() {
    let dir = tempdir().unwrap();
    let curriculo = dir.path().join("matriz_curricular.json");
    let catalogo = dir.path().join("db_disciplinas.json");
    let saida = dir.path().join("saida.json");

    escrever(&curriculo, &json!([{ "codigo": "ECO00101", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [] }]));
    escrever(&catalogo, &json!([{ "codigo": "ECO00101" }, { "codigo": "ECO00101", "turma": null }]));

    let r = executar_enriquecimento(&catalogo, &curriculo, &dir.path().join("eq.json"), &saida).unwrap();
    assert_eq!(r.resumo.diretos, 2);

    let v = ler(&saida);
    assert_eq!(
        v[0],
        json!({ "codigo": "ECO00101", "periodo": 1, "tipo": "obrigatoria", "prerequisitos": [], "corequisitos": [] })
    );
    assert_eq!(v[1]["turma"], Value::Null);
    assert!(v[1].as_object().unwrap().contains_key("turma"));
}
