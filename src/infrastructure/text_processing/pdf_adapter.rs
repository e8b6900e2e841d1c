use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates the text of every page in page order. Pages without text add nothing.
    fn extract_pages(path: &std::path::Path) -> Result<String, String> {
        let mut doc = PdfDocument::open(path).map_err(|e| format!("failed to parse PDF: {e}"))?;

        let page_count = doc
            .page_count()
            .map_err(|e| format!("failed to read page count: {e}"))?;

        let mut text = String::new();
        for page_index in 0..page_count {
            let page_text = doc
                .extract_text(page_index)
                .map_err(|e| format!("failed to read page {}: {e}", page_index + 1))?;
            text.push_str(&page_text);
            tracing::debug!(page = page_index + 1, page_count, "Extracted PDF page");
        }

        Ok(text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.format() != DocumentFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let failed = |cause: String| FileLoaderError::extraction_failed(&file.filename, cause);

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| failed(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(&file.content)
            .map_err(|e| failed(format!("failed to write temp file: {e}")))?;

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(temp_file.path())),
        )
        .await
        .map_err(|_| failed("PDF extraction timed out".to_string()))?
        .map_err(|e| failed(format!("task join error: {e}")))?
        .map_err(failed)?;

        tracing::info!(chars = text.chars().count(), "PDF text extraction complete");
        Ok(text)
    }
}
