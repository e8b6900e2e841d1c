use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

use super::blocking::run_parser;
use super::ooxml::{ParagraphScope, read_paragraphs};

/// Word 2007+ documents: body paragraphs joined by newlines.
pub struct DocxAdapter;

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, file), fields(filename = %file.filename))]
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.format() != DocumentFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let data = file.content.clone();
        let text = run_parser(&file.filename, move || {
            read_paragraphs(&data, ParagraphScope::Body).map(|paragraphs| paragraphs.join("\n"))
        })
        .await?;

        tracing::info!(chars = text.chars().count(), "Extracted text from DOCX");
        Ok(text)
    }
}
