use async_trait::async_trait;

use crate::domain::UploadedFile;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileLoaderError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
    #[error("Error extracting text: {cause}")]
    ExtractionFailed { filename: String, cause: String },
}

impl FileLoaderError {
    pub fn extraction_failed(filename: &str, cause: impl ToString) -> Self {
        Self::ExtractionFailed {
            filename: filename.to_string(),
            cause: cause.to_string(),
        }
    }
}
