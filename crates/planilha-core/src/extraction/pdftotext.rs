use crate::error::PlanilhaError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so report columns stay on one line.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PlanilhaError> {
        // The temp file is removed when `tmpfile` drops, on every return path.
        let mut tmpfile = tempfile::NamedTempFile::new()?;
        tmpfile.write_all(pdf_bytes)?;

        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlanilhaError::PdftotextNotFound
                } else {
                    PlanilhaError::DocumentParse(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            return Err(exit_failure(output.status.code(), &output.stderr));
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// A non-zero pdftotext exit means the document could not be read.
fn exit_failure(code: Option<i32>, stderr: &[u8]) -> PlanilhaError {
    let stderr = String::from_utf8_lossy(stderr);
    PlanilhaError::DocumentParse(format!(
        "pdftotext exited with code {}: {}",
        code.unwrap_or(-1),
        stderr.trim()
    ))
}

/// Split pdftotext output into pages (form feed `\x0c` separates pages).
///
/// pdftotext terminates every page with a form feed, so the trailing empty
/// segment is dropped. An empty first page is kept.
fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent::from_text(i + 1, page_text))
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}
