#[derive(Debug, thiserror::Error)]
pub enum PlanilhaError {
    #[error("failed to read PDF document: {0}")]
    DocumentParse(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("failed to write spreadsheet: {0}")]
    Serialization(String),

    #[error("export tag '{field}' must not be empty")]
    InvalidTag { field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<zip::result::ZipError> for PlanilhaError {
    fn from(e: zip::result::ZipError) -> Self {
        PlanilhaError::Serialization(e.to_string())
    }
}
