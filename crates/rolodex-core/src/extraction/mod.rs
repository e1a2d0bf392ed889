pub mod pdftotext;
pub mod text;

use crate::error::RolodexError;

/// Raw text of a single page of the directory.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// How the backend lays out extracted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMode {
    /// Reading order, upright text only.
    #[default]
    Reading,
    /// Preserve physical column layout.
    Layout,
    /// Content-stream order.
    Raw,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RolodexError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split a form-feed separated text dump into pages.
///
/// A trailing empty page (pdftotext ends its output with `\x0c`) is dropped.
pub fn split_pages(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect();

    while pages.len() > 1 && pages.last().is_some_and(|p| p.text.trim().is_empty()) {
        pages.pop();
    }

    pages
}
