//! PDF text extraction and page inspection

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Summary of a PDF shown by the `list` command
#[derive(Debug, Clone)]
pub struct PdfInfo {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

fn load(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    Ok(Document::load(path)?)
}

/// Extract the text of every page, in page order, concatenated
///
/// A PDF without pages yields an empty string.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let doc = load(path)?;

    let mut text = String::new();
    // get_pages() is keyed by page number, so iteration is in page order
    for page_number in doc.get_pages().keys() {
        let page_text = doc.extract_text(&[*page_number])?;
        text.push_str(&page_text);
    }

    Ok(text)
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    let doc = load(path)?;
    Ok(doc.get_pages().len())
}

/// Read page count plus title and author from the Info dictionary
pub fn pdf_info(path: &Path) -> Result<PdfInfo> {
    let doc = load(path)?;

    let info_dict = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_dictionary(id))
        .ok();

    let field = |key: &[u8]| -> Option<String> {
        let bytes = info_dict?.get(key).and_then(Object::as_str).ok()?;
        String::from_utf8(bytes.to_vec()).ok()
    };

    Ok(PdfInfo {
        page_count: doc.get_pages().len(),
        title: field(b"Title"),
        author: field(b"Author"),
    })
}
