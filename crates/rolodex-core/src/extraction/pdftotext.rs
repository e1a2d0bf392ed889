use crate::error::RolodexError;
use crate::extraction::{split_pages, PageContent, PdfExtractor, TextMode};
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
pub struct PdftotextExtractor {
    mode: TextMode,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        Self::with_mode(TextMode::default())
    }

    pub fn with_mode(mode: TextMode) -> Self {
        PdftotextExtractor { mode }
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_args(mode: TextMode) -> &'static [&'static str] {
    match mode {
        TextMode::Reading => &[],
        TextMode::Layout => &["-layout"],
        TextMode::Raw => &["-raw"],
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, RolodexError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| RolodexError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| RolodexError::Extraction(e.to_string()))?;

        let output = Command::new("pdftotext")
            .args(mode_args(self.mode))
            .args(["-enc", "UTF-8"])
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RolodexError::PdftotextNotFound
                } else {
                    RolodexError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(RolodexError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
