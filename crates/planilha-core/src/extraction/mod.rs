pub mod layout;
pub mod lopdf_text;
pub mod pdftotext;

use crate::error::PlanilhaError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn from_text(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PlanilhaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Extract the whole document as one text blob, pages in order.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, PlanilhaError> {
        let pages = self.extract_pages(pdf_bytes)?;
        Ok(join_pages(&pages))
    }
}

/// Concatenate page lines in page order, one line per `\n`.
pub fn join_pages(pages: &[PageContent]) -> String {
    pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}
