pub mod catalog;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod selection;

use error::PlanilhaError;
use extraction::PdfExtractor;
use model::{ExportTags, ProductRecord};
use parsing::ParsedReport;
use selection::ProductSelection;

/// Main API entry point: extract product records from an ABC report PDF.
///
/// A document without report rows is not an error; check
/// [`ParsedReport::status`] for `NoRecordsFound`.
pub fn extract_products(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ParsedReport, PlanilhaError> {
    let text = extractor.extract_text(pdf_bytes)?;
    let report = parsing::parse_products(&text);

    log::info!(
        "{} extracted {} product(s) from {} bytes of text",
        extractor.backend_name(),
        report.records.len(),
        text.len()
    );

    Ok(report)
}

/// Filter records by the user's selection and write them to an `.xlsx` workbook.
pub fn export_products(
    records: &[ProductRecord],
    selection: &ProductSelection,
    tags: &ExportTags,
) -> Result<Vec<u8>, PlanilhaError> {
    let selected = selection.apply(records);
    log::info!(
        "exporting {} of {} product(s) as {tags}",
        selected.len(),
        records.len()
    );
    export::export_xlsx(&selected, tags)
}
