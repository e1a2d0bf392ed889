pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use std::path::Path;

use tracing::info;

use error::RolodexError;
use extraction::pdftotext::PdftotextExtractor;
use extraction::text::PlainTextExtractor;
use extraction::{PdfExtractor, TextMode};
use model::ParsedDirectory;

/// Options for reading an input document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub text_mode: TextMode,
}

/// Main API entry point: extract every company record from a document.
///
/// Fails only when the document yields no text at all; individual records
/// that cannot be parsed are reported in `ParsedDirectory::warnings`.
pub fn extract_directory(
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<ParsedDirectory, RolodexError> {
    let pages = extractor.extract_pages(bytes)?;

    if pages.iter().all(|p| p.text.trim().is_empty()) {
        return Err(RolodexError::NoText);
    }

    info!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracting companies"
    );

    Ok(parsing::parse_pages(&pages))
}

/// Read `path` and extract it, picking the backend by extension.
///
/// `.txt` files are treated as form-feed separated page dumps; anything
/// else goes through pdftotext.
pub fn extract_file(
    path: &Path,
    options: &ExtractOptions,
) -> Result<ParsedDirectory, RolodexError> {
    let bytes = std::fs::read(path)?;

    if is_text_dump(path) {
        extract_directory(&bytes, &PlainTextExtractor)
    } else {
        extract_directory(&bytes, &PdftotextExtractor::with_mode(options.text_mode))
    }
}

fn is_text_dump(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
