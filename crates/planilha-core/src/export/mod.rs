pub mod xlsx;

use crate::error::PlanilhaError;
use crate::model::{ExportRow, ExportTags, ProductRecord};
use xlsx::Cell;

/// Conventional file name for the delivered spreadsheet.
pub const EXPORT_FILE_NAME: &str = "planilha_produtos.xlsx";

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Spreadsheet header, in column order.
pub const HEADER: [&str; 6] = ["Produto", "Setor", "Mês", "Semana", "Quantidade", "Valor"];

/// Attach the export tags to every record, keeping input order.
pub fn build_rows(
    records: &[ProductRecord],
    tags: &ExportTags,
) -> Result<Vec<ExportRow>, PlanilhaError> {
    if let Some(field) = tags.blank_field() {
        return Err(PlanilhaError::InvalidTag { field });
    }

    Ok(records
        .iter()
        .map(|record| ExportRow {
            product: record.name.clone(),
            sector: tags.sector.clone(),
            month: tags.month.clone(),
            week: tags.week.clone(),
            quantity: record.quantity,
            value: record.total_value,
        })
        .collect())
}

/// Serialize export rows into an `.xlsx` workbook. An empty slice yields a
/// header-only sheet.
pub fn write_xlsx(rows: &[ExportRow]) -> Result<Vec<u8>, PlanilhaError> {
    let cells: Vec<Vec<Cell<'_>>> = rows
        .iter()
        .map(|row| {
            vec![
                Cell::Text(&row.product),
                Cell::Text(&row.sector),
                Cell::Text(&row.month),
                Cell::Text(&row.week),
                Cell::Number(row.quantity),
                Cell::Number(row.value),
            ]
        })
        .collect();

    let bytes = xlsx::write_workbook(&HEADER, &cells)?;
    log::info!("wrote spreadsheet with {} row(s), {} bytes", rows.len(), bytes.len());
    Ok(bytes)
}

/// Build and serialize in one step.
pub fn export_xlsx(records: &[ProductRecord], tags: &ExportTags) -> Result<Vec<u8>, PlanilhaError> {
    let rows = build_rows(records, tags)?;
    write_xlsx(&rows)
}
