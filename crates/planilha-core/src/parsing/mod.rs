pub mod row;
pub mod values;

use crate::model::ProductRecord;
use row::{looks_like_row, ReportRow, RowRejection};
use serde::{Deserialize, Serialize};

/// Records parsed from one document, plus the row-shaped lines that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedReport {
    pub records: Vec<ProductRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}

/// A line that starts like a report row but produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number within the extracted text.
    pub line_number: usize,
    pub line_text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    RecordsFound(usize),
    /// Not an error: the document simply contains no report rows.
    NoRecordsFound,
}

impl ParsedReport {
    pub fn status(&self) -> ExtractionStatus {
        if self.records.is_empty() {
            ExtractionStatus::NoRecordsFound
        } else {
            ExtractionStatus::RecordsFound(self.records.len())
        }
    }

    /// Product names in report order, duplicates included.
    pub fn product_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Parse extracted report text into product records.
///
/// Every line is trimmed and matched on its own; lines that are not report
/// rows (headers, footers, totals) are skipped. Names shorter than 10
/// characters cannot match the row pattern.
pub fn parse_products(text: &str) -> ParsedReport {
    let mut report = ParsedReport::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        match try_parse_row(line) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {}
            Err(rejection) => {
                log::debug!("skipping line {}: {}: {line}", index + 1, rejection.reason());
                report.skipped_lines.push(SkippedLine {
                    line_number: index + 1,
                    line_text: line.to_string(),
                    reason: rejection.reason().to_string(),
                });
            }
        }
    }

    log::debug!(
        "parsed {} record(s), {} row-like line(s) skipped",
        report.records.len(),
        report.skipped_lines.len()
    );

    report
}

/// Try to parse a single trimmed line as a product row.
///
/// Returns Ok(None) for lines that are not row-shaped at all, and Err for
/// row-shaped lines that still could not become a record.
fn try_parse_row(line: &str) -> Result<Option<ProductRecord>, RowRejection> {
    match ReportRow::match_line(line) {
        Some(row) => row.into_record().map(Some),
        None if looks_like_row(line) => Err(RowRejection::PatternMismatch),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const REPORT: &str = "\
SHOPPING DO PAO - CURVA ABC DE PRODUTOS
Periodo: 01/08/2024 a 07/08/2024
CLASSIF CODIGO PRODUTO CUSTO QUANTIDADE VALOR TOTAL
1 1001 PAO FRANCES UNIDADE 2,50 10,00 25,00
2 2040 BOLO DE CENOURA KG 18,90 3,250 61,43
3 3007 PAO 1,00 5,00 5,00
4 1001 PAO FRANCES UNIDADE 2,50 4,00 10,00
TOTAL GERAL 101,43
Pagina 1 de 1
";

    #[test]
    fn test_parse_products_in_source_order() {
        let report = parse_products(REPORT);
        assert_eq!(
            report.product_names(),
            vec![
                "PAO FRANCES UNIDADE",
                "BOLO DE CENOURA KG",
                "PAO FRANCES UNIDADE"
            ]
        );
        assert_eq!(report.records[1].quantity, dec!(3.250));
        assert_eq!(report.records[1].total_value, dec!(61.43));
        assert_eq!(report.status(), ExtractionStatus::RecordsFound(3));
    }

    #[test]
    fn test_short_name_row_is_reported_as_skipped() {
        let report = parse_products(REPORT);
        assert_eq!(report.skipped_lines.len(), 1);
        assert_eq!(report.skipped_lines[0].line_number, 6);
        assert_eq!(report.skipped_lines[0].line_text, "3 3007 PAO 1,00 5,00 5,00");
        assert_eq!(
            report.skipped_lines[0].reason,
            "does not match report row pattern"
        );
    }

    #[test]
    fn test_no_rows_is_empty_not_error() {
        let report = parse_products("Relatorio vazio\nNenhum movimento no periodo\n");
        assert!(report.records.is_empty());
        assert!(report.skipped_lines.is_empty());
        assert_eq!(report.status(), ExtractionStatus::NoRecordsFound);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(parse_products("").status(), ExtractionStatus::NoRecordsFound);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let report = parse_products("   1 1001 PAO FRANCES UNIDADE   2,50   10,00   25,00   \r\n");
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].name, "PAO FRANCES UNIDADE");
    }

    #[test]
    fn test_blank_name_row_is_reported_as_skipped() {
        let report = parse_products("1 1001              2,50 10,00 25,00");
        assert!(report.records.is_empty());
        assert_eq!(report.status(), ExtractionStatus::NoRecordsFound);
        assert_eq!(report.skipped_lines.len(), 1);
        assert_eq!(report.skipped_lines[0].line_number, 1);
        assert_eq!(report.skipped_lines[0].reason, "product name is blank");
    }

    #[test]
    fn test_parse_is_idempotent() {
        assert_eq!(parse_products(REPORT), parse_products(REPORT));
    }

    #[test]
    fn test_try_parse_row_header_line() {
        assert_eq!(
            try_parse_row("CLASSIF CODIGO PRODUTO CUSTO QUANTIDADE VALOR TOTAL"),
            Ok(None)
        );
    }
}
