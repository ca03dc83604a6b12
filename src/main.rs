// --- Matriz Curricular -> Catálogo de Ofertas - CLI ---

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use matrizshift::config::{Caminhos, ColunasMatriz};
use matrizshift::pipeline::resumo_curriculo;
use matrizshift::{Result, executar_enriquecimento, executar_extracao, executar_importacao};

#[derive(Parser, Debug)]
#[command(name = "matrizshift", version, about = "Extrai a matriz curricular e enriquece o catálogo de ofertas")]
struct Cli {
    #[command(subcommand)]
    comando: Comando,
}

#[derive(Subcommand, Debug)]
enum Comando {
    /// Dump de layout do PDF -> matriz_curricular.json
    Extrair {
        /// Dump JSON com palavras posicionadas e tabelas por página
        #[arg(long)]
        layout: Option<PathBuf>,
        #[arg(long)]
        saida: Option<PathBuf>,
        /// Coluna do código (0-based)
        #[arg(long)]
        col_codigo: Option<usize>,
        #[arg(long)]
        col_nome: Option<usize>,
        #[arg(long)]
        col_tipo: Option<usize>,
        #[arg(long)]
        col_prerequisitos: Option<usize>,
        #[arg(long)]
        col_corequisitos: Option<usize>,
        /// A tabela não tem coluna de tipo (deriva do período)
        #[arg(long)]
        sem_tipo: bool,
        /// A tabela não tem coluna de co-requisitos
        #[arg(long)]
        sem_corequisitos: bool,
    },
    /// Enriquece o catálogo com período, tipo e requisitos da matriz
    Enriquecer {
        #[arg(long)]
        catalogo: Option<PathBuf>,
        #[arg(long)]
        curriculo: Option<PathBuf>,
        #[arg(long)]
        equivalencias: Option<PathBuf>,
        /// Default: reescreve o próprio catálogo
        #[arg(long)]
        saida: Option<PathBuf>,
    },
    /// Valida uma matriz JSON gerada por ferramenta externa
    Importar {
        #[arg(long)]
        entrada: Option<PathBuf>,
        #[arg(long)]
        saida: Option<PathBuf>,
    },
}

fn executar(comando: Comando) -> Result<()> {
    let caminhos = Caminhos::do_ambiente();

    match comando {
        Comando::Extrair {
            layout,
            saida,
            col_codigo,
            col_nome,
            col_tipo,
            col_prerequisitos,
            col_corequisitos,
            sem_tipo,
            sem_corequisitos,
        } => {
            let padrao = ColunasMatriz::default();
            let colunas = ColunasMatriz {
                codigo: col_codigo.unwrap_or(padrao.codigo),
                nome: col_nome.unwrap_or(padrao.nome),
                tipo: if sem_tipo { None } else { col_tipo.or(padrao.tipo) },
                prerequisitos: col_prerequisitos.or(padrao.prerequisitos),
                corequisitos: if sem_corequisitos { None } else { col_corequisitos.or(padrao.corequisitos) },
            };
            let layout = layout.unwrap_or(caminhos.layout);
            let saida = saida.unwrap_or(caminhos.curriculo);

            let (curriculo, relatorio) = executar_extracao(&layout, &saida, &colunas)?;
            println!("{}", resumo_curriculo(&curriculo));
            println!("  {}", relatorio);
            println!("  -> {}", saida.display());
        }
        Comando::Enriquecer { catalogo, curriculo, equivalencias, saida } => {
            let catalogo = catalogo.unwrap_or(caminhos.catalogo);
            let curriculo = curriculo.unwrap_or(caminhos.curriculo);
            let equivalencias = equivalencias.unwrap_or(caminhos.equivalencias);
            let saida = saida.unwrap_or_else(|| catalogo.clone());

            let resultado = executar_enriquecimento(&catalogo, &curriculo, &equivalencias, &saida)?;
            println!("  {}", resultado.resumo);
            if !resultado.sugestoes.is_empty() {
                println!("  {} sugestões de equivalência:", resultado.sugestoes.len());
                for s in &resultado.sugestoes {
                    println!("    \"{}\": \"{}\"  ({} ~ {})", s.codigo_catalogo, s.codigo_matriz, s.nome_catalogo, s.nome_matriz);
                }
            }
            println!("  Salvo em {}", saida.display());
        }
        Comando::Importar { entrada, saida } => {
            let entrada = entrada.unwrap_or(caminhos.gerado);
            let saida = saida.unwrap_or(caminhos.curriculo);

            let curriculo = executar_importacao(&entrada, &saida)?;
            println!("{}", resumo_curriculo(&curriculo));
            println!("  -> {}", saida.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    match executar(cli.comando) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERRO: {}", e);
            ExitCode::FAILURE
        }
    }
}
