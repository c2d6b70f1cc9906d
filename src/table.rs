//! Carregamento da planilha de referência cruzada
//!
//! A tabela é lida uma única vez na partida do processo e nunca é
//! modificada depois; todas as consultas compartilham a mesma instância
//! por referência.

use crate::error::{GaussError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Nome padrão da planilha de referência quando nada é configurado.
pub const DEFAULT_TABLE_FILE: &str = "Cross000-BRA-referencia-cruzada-00.xlsx";

pub const COL_CODE: &str = "Código";
pub const COL_GROUP: &str = "Gauss";
pub const COL_BRAND: &str = "Marca";
pub const COL_PRODUCT: &str = "Produto";
pub const COL_STATUS: &str = "Status";

/// Uma linha da planilha de referência.
///
/// `code` não é único: vários códigos equivalentes apontam para o mesmo
/// código Gauss (`group_key`).
#[derive(Debug, Clone)]
pub struct CrossRow {
    pub code: String,
    pub group_key: String,
    pub brand: String,
    pub product: String,
    pub status: String,
}

/// Tabela de referência imutável, na ordem original da planilha.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    rows: Vec<CrossRow>,
}

impl ReferenceTable {
    pub fn new(rows: Vec<CrossRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CrossRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Carrega a primeira aba da planilha.
    ///
    /// As colunas são localizadas pelo cabeçalho (qualquer ordem);
    /// coluna obrigatória ausente é erro. Linhas com a célula de código
    /// vazia são ignoradas.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GaussError::TableNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path)
            .map_err(|e| GaussError::ExcelRead(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(GaussError::EmptyWorkbook)?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| GaussError::ExcelRead(e.to_string()))?;

        let mut rows_iter = range.rows();
        let header = rows_iter.next().ok_or(GaussError::EmptyWorkbook)?;
        let columns = ColumnIndex::from_header(header)?;

        let mut rows = Vec::new();
        for row in rows_iter {
            let code = cell_at(row, columns.code);
            if code.is_empty() {
                continue;
            }
            rows.push(CrossRow {
                code,
                group_key: cell_at(row, columns.group),
                brand: cell_at(row, columns.brand),
                product: cell_at(row, columns.product),
                status: cell_at(row, columns.status),
            });
        }

        Ok(Self { rows })
    }
}

/// Posições das colunas consumidas, resolvidas a partir do cabeçalho.
#[derive(Debug)]
struct ColumnIndex {
    code: usize,
    group: usize,
    brand: usize,
    product: usize,
    status: usize,
}

impl ColumnIndex {
    fn from_header(header: &[Data]) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            header
                .iter()
                .position(|cell| cell_to_string(cell).trim() == name)
                .ok_or_else(|| GaussError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            code: find(COL_CODE)?,
            group: find(COL_GROUP)?,
            brand: find(COL_BRAND)?,
            product: find(COL_PRODUCT)?,
            status: find(COL_STATUS)?,
        })
    }

}

fn cell_at(row: &[Data], idx: usize) -> String {
    row.get(idx).map(cell_to_string).unwrap_or_default()
}

/// Converte qualquer célula em texto (códigos numéricos viram texto).
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<Data> {
        names.iter().map(|n| Data::String(n.to_string())).collect()
    }

    #[test]
    fn test_column_index_any_order() {
        let h = header(&["Status", "Gauss", "Produto", "Código", "Marca"]);
        let idx = ColumnIndex::from_header(&h).unwrap();
        assert_eq!(idx.code, 3);
        assert_eq!(idx.group, 1);
        assert_eq!(idx.status, 0);
    }

    #[test]
    fn test_missing_column_is_error() {
        let h = header(&["Código", "Gauss", "Marca", "Produto"]);
        let err = ColumnIndex::from_header(&h).unwrap_err();
        assert!(matches!(err, GaussError::MissingColumn(name) if name == COL_STATUS));
    }

    #[test]
    fn test_numeric_code_cell_becomes_text() {
        assert_eq!(cell_to_string(&Data::Float(12345.0)), "12345");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
