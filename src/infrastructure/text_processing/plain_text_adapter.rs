use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

pub struct PlainTextAdapter;

/// Decodes UTF-8, silently dropping byte sequences that are not valid UTF-8.
pub fn decode_utf8_dropping_invalid(data: &[u8]) -> String {
    data.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        if file.format() != DocumentFormat::Txt {
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let text = decode_utf8_dropping_invalid(&file.content);
        tracing::info!(chars = text.chars().count(), "Extracted text from TXT file");
        Ok(text)
    }
}
