use clap::Parser;
use gauss_cross::{cli, config, error, export, input, matcher, table};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use export::CodeLayout;
use matcher::ResultRecord;
use std::path::PathBuf;
use table::ReferenceTable;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Search { codes, input: input_file, table } => {
            println!("🔍 gauss-cross - pesquisa\n");

            let codes = input::resolve_codes(&codes, input_file.as_deref())?;
            let table = load_table(&config, table, cli.verbose)?;

            let records = matcher::match_codes(&codes, &table);
            print_records(&records);
        }

        Commands::ExportActive { codes, input: input_file, table, layout, output } => {
            run_export(
                &config,
                codes,
                input_file,
                table,
                layout,
                output.unwrap_or_else(|| PathBuf::from(export::ACTIVE_EXPORT_FILE)),
                true,
                cli.verbose,
            )?;
        }

        Commands::ExportGeneral { codes, input: input_file, table, layout, output } => {
            run_export(
                &config,
                codes,
                input_file,
                table,
                layout,
                output.unwrap_or_else(|| PathBuf::from(export::GENERAL_EXPORT_FILE)),
                false,
                cli.verbose,
            )?;
        }

        Commands::Config { set_table, show } => {
            let mut config = config;

            if let Some(path) = set_table {
                config.set_table_path(path)?;
                println!("✔ Planilha de referência configurada");
            }

            if show {
                println!("Configuração:");
                match &config.table_path {
                    Some(path) => println!("  Planilha de referência: {}", path.display()),
                    None => println!(
                        "  Planilha de referência: (padrão) {}",
                        table::DEFAULT_TABLE_FILE
                    ),
                }
            }
        }
    }

    Ok(())
}

fn load_table(
    config: &Config,
    cli_override: Option<PathBuf>,
    verbose: bool,
) -> Result<ReferenceTable> {
    let path = config.resolve_table_path(cli_override);
    let table = ReferenceTable::load(&path)?;
    if verbose {
        println!("✔ Planilha carregada: {} ({} linhas)", path.display(), table.len());
    }
    Ok(table)
}

#[allow(clippy::too_many_arguments)]
fn run_export(
    config: &Config,
    codes: Vec<String>,
    input_file: Option<PathBuf>,
    table: Option<PathBuf>,
    layout: CodeLayout,
    output: PathBuf,
    active_only: bool,
    verbose: bool,
) -> Result<()> {
    println!("📄 gauss-cross - exportação\n");

    let codes = input::resolve_codes(&codes, input_file.as_deref())?;
    let table = load_table(config, table, verbose)?;

    let records = matcher::match_codes(&codes, &table);
    let written = export::export_results(&records, active_only, layout, &output)?;

    println!("✔ Planilha gerada: {} ({} linhas)", output.display(), written);
    Ok(())
}

fn print_records(records: &[ResultRecord]) {
    for record in records {
        println!("Código Gauss: {}", record.group_key());
        println!("Marca: {}", record.brand());
        println!("Código: {}", record.joined_codes());
        println!("Produto: {}", record.product());
        println!("Status: {}", record.status());
        println!("---");
    }
    println!("{} registro(s)", records.len());
}
