//! Exportação dos resultados para planilha
//!
//! Transforma a lista de registros em linhas tabulares (filtro de ativos e
//! modo de leiaute) e delega a escrita do arquivo ao módulo `excel`.

pub mod excel;

use crate::error::Result;
use crate::matcher::{ResultRecord, STATUS_ACTIVE};
use std::path::Path;

/// Nome do arquivo gerado pela exportação "apenas ativos".
pub const ACTIVE_EXPORT_FILE: &str = "resultados_pesquisa_ativa.xlsx";

/// Nome do arquivo gerado pela exportação geral.
pub const GENERAL_EXPORT_FILE: &str = "resultados_pesquisa_geral.xlsx";

/// Modo de leiaute da coluna de códigos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeLayout {
    /// Todos os códigos equivalentes em uma célula, separados por vírgula.
    #[default]
    Joined,
    /// Uma linha por código, demais campos repetidos.
    OneRowPerCode,
}

impl std::str::FromStr for CodeLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joined" | "virgula" | "vírgula" => Ok(CodeLayout::Joined),
            "per-code" | "abaixo" => Ok(CodeLayout::OneRowPerCode),
            _ => Err(format!("Leiaute desconhecido: {}. Use joined ou per-code", s)),
        }
    }
}

impl std::fmt::Display for CodeLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeLayout::Joined => write!(f, "joined"),
            CodeLayout::OneRowPerCode => write!(f, "per-code"),
        }
    }
}

/// Uma linha já achatada da planilha de saída.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub group_key: String,
    pub brand: String,
    pub code: String,
    pub product: String,
    pub status: String,
}

/// Monta as linhas de saída; sem E/S.
///
/// `active_only` descarta registros cujo status não é exatamente "Ativo"
/// (comparação sensível a maiúsculas). Registros não encontrados exibem o
/// marcador no lugar do status, então nunca sobrevivem ao filtro de ativos
/// e sempre passam na exportação geral — comportamento herdado e
/// intencional. A ordem dos registros é preservada.
pub fn build_rows(
    records: &[ResultRecord],
    active_only: bool,
    layout: CodeLayout,
) -> Vec<ExportRow> {
    let mut rows = Vec::new();

    for record in records {
        if active_only && record.status() != STATUS_ACTIVE {
            continue;
        }

        match layout {
            CodeLayout::Joined => rows.push(row_for(record, record.joined_codes())),
            CodeLayout::OneRowPerCode => {
                for code in record.codes() {
                    rows.push(row_for(record, code.to_string()));
                }
            }
        }
    }

    rows
}

fn row_for(record: &ResultRecord, code: String) -> ExportRow {
    ExportRow {
        group_key: record.group_key().to_string(),
        brand: record.brand().to_string(),
        code,
        product: record.product().to_string(),
        status: record.status().to_string(),
    }
}

/// Monta as linhas e grava a planilha de saída.
pub fn export_results(
    records: &[ResultRecord],
    active_only: bool,
    layout: CodeLayout,
    output_path: &Path,
) -> Result<usize> {
    let rows = build_rows(records, active_only, layout);
    excel::write_results(&rows, output_path)?;
    Ok(rows.len())
}
