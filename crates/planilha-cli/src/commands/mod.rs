pub mod export;
pub mod options;
pub mod parse;

use planilha_core::error::PlanilhaError;
use planilha_core::extraction::lopdf_text::LopdfExtractor;
use planilha_core::extraction::pdftotext::PdftotextExtractor;
use planilha_core::extraction::PdfExtractor;
use planilha_core::parsing::ParsedReport;
use std::path::Path;
use std::process::ExitCode;

/// Exit status when the PDF was read but contained no product rows.
pub const NO_RECORDS_EXIT: u8 = 2;

pub const NO_RECORDS_MESSAGE: &str = "Nenhum produto encontrado no PDF.";

pub fn extractor(backend: &str) -> Box<dyn PdfExtractor> {
    match backend {
        "pdftotext" if PdftotextExtractor::is_available() => Box::new(PdftotextExtractor::new()),
        "pdftotext" => {
            log::warn!("pdftotext not found on PATH, falling back to lopdf");
            Box::new(LopdfExtractor::new())
        }
        _ => Box::new(LopdfExtractor::new()),
    }
}

/// Read the PDF at `path` and parse it with the named backend.
pub fn load_report(path: &Path, backend: &str) -> Result<ParsedReport, PlanilhaError> {
    let pdf_bytes = std::fs::read(path)?;
    let extractor = extractor(backend);
    planilha_core::extract_products(&pdf_bytes, extractor.as_ref())
}

pub fn no_records() -> ExitCode {
    eprintln!("{NO_RECORDS_MESSAGE}");
    ExitCode::from(NO_RECORDS_EXIT)
}
