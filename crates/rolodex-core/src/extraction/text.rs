use crate::error::RolodexError;
use crate::extraction::{split_pages, PageContent, PdfExtractor};

/// Backend for text that was already pulled out of the PDF.
///
/// Input is UTF-8 with pages separated by form feeds, the same shape
/// `pdftotext` writes to stdout.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, RolodexError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}
