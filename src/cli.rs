use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::CodeLayout;

#[derive(Parser)]
#[command(name = "gauss-cross")]
#[command(about = "Consulta de referência cruzada Gauss", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Saída detalhada
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Busca códigos e exibe os grupos encontrados
    Search {
        /// Códigos a buscar (sem argumentos, lê interativamente)
        codes: Vec<String>,

        /// Arquivo de texto com os códigos
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Planilha de referência (padrão: a configurada)
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Exporta planilha apenas com produtos de status "Ativo"
    ExportActive {
        /// Códigos a buscar (sem argumentos, lê interativamente)
        codes: Vec<String>,

        /// Arquivo de texto com os códigos
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Planilha de referência (padrão: a configurada)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Leiaute da coluna de códigos (joined/per-code)
        #[arg(short, long, default_value = "joined")]
        layout: CodeLayout,

        /// Arquivo de saída (padrão: resultados_pesquisa_ativa.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exporta planilha geral, incluindo códigos não encontrados
    ExportGeneral {
        /// Códigos a buscar (sem argumentos, lê interativamente)
        codes: Vec<String>,

        /// Arquivo de texto com os códigos
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Planilha de referência (padrão: a configurada)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Leiaute da coluna de códigos (joined/per-code)
        #[arg(short, long, default_value = "joined")]
        layout: CodeLayout,

        /// Arquivo de saída (padrão: resultados_pesquisa_geral.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Exibe ou altera a configuração
    Config {
        /// Define a planilha de referência padrão
        #[arg(long)]
        set_table: Option<PathBuf>,

        /// Exibe a configuração atual
        #[arg(long)]
        show: bool,
    },
}
