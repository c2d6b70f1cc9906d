//! Escrita da planilha de resultados com rust_xlsxwriter

use crate::error::{GaussError, Result};
use crate::export::ExportRow;
use crate::table::{COL_BRAND, COL_CODE, COL_GROUP, COL_PRODUCT, COL_STATUS};
use rust_xlsxwriter::{Format, FormatBorder, Workbook};
use std::path::Path;

/// Colunas da planilha de saída, na ordem do resultado original.
const HEADERS: [&str; 5] = [COL_GROUP, COL_BRAND, COL_CODE, COL_PRODUCT, COL_STATUS];

/// Grava as linhas em um arquivo `.xlsx`.
///
/// Lista vazia gera planilha só com o cabeçalho, não é erro.
pub fn write_results(rows: &[ExportRow], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new()
        .set_bold()
        .set_border_bottom(FormatBorder::Thin);

    for (col, title) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(|e| GaussError::ExcelWrite(e.to_string()))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            row.group_key.as_str(),
            row.brand.as_str(),
            row.code.as_str(),
            row.product.as_str(),
            row.status.as_str(),
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, *value)
                .map_err(|e| GaussError::ExcelWrite(e.to_string()))?;
        }
    }

    workbook
        .save(output_path)
        .map_err(|e| GaussError::ExcelWrite(e.to_string()))?;

    Ok(())
}
