//! Content extraction for source files

pub mod pdf;
pub mod text;

use std::path::Path;
use crate::error::Result;

// Re-export commonly used items
pub use pdf::{count_pages, extract_pdf_text, pdf_info, PdfInfo};
pub use text::read_text;

/// How a source file's contents are obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Text extracted page by page from a PDF
    Pdf,
    /// Whole file read as UTF-8
    Text,
}

impl SourceKind {
    /// Classify a file by its extension. Only `.pdf` (any case) is a PDF.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => SourceKind::Pdf,
            _ => SourceKind::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Pdf => "pdf",
            SourceKind::Text => "text",
        }
    }
}

/// Extract the contents of a source file according to its kind
pub fn extract_contents(path: &Path) -> Result<String> {
    match SourceKind::of(path) {
        SourceKind::Pdf => extract_pdf_text(path),
        SourceKind::Text => read_text(path),
    }
}
