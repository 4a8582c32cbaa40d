//! Embedded-text PDF extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::path::Path;
use tracing::debug;

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// Minimum embedded-text length to consider a PDF text-based. Scanned
/// documents typically yield nothing or a few stray glyphs.
const MIN_TEXT_LENGTH: usize = 50;

/// PDF content extractor.
///
/// `lopdf` provides document structure (page count, encryption); the
/// text itself comes from `pdf-extract` over the raw bytes. Scanned
/// documents are detected but not OCRed here; rasterization and OCR
/// happen upstream of this crate.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor with no document loaded.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| PdfError::Parse(e.to_string()))?;
        let mut extractor = Self::new();
        extractor.load(&data)?;
        Ok(extractor)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let document = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;
        if document.is_encrypted() {
            return Err(PdfError::Encrypted);
        }

        debug!("loaded PDF with {} page(s)", document.get_pages().len());
        self.document = Some(document);
        self.raw_data = data.to_vec();
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        if self.page_count() == 0 {
            return PdfType::Empty;
        }
        match self.extract_text() {
            Ok(text) if text.trim().len() >= MIN_TEXT_LENGTH => PdfType::Text,
            Ok(_) => PdfType::Image,
            Err(_) => PdfType::Image,
        }
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("no document loaded".to_string()));
        }
        if self.page_count() == 0 {
            return Err(PdfError::NoPages);
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_extractor() {
        let extractor = PdfExtractor::new();
        assert_eq!(extractor.page_count(), 0);
        assert_eq!(extractor.analyze(), PdfType::Empty);
        assert!(matches!(
            extractor.extract_text(),
            Err(PdfError::Parse(_))
        ));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.load(b"not a pdf"),
            Err(PdfError::Parse(_))
        ));
    }
}
