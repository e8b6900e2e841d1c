use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedFile};

use super::{DocAdapter, DocxAdapter, PdfAdapter, PlainTextAdapter, XlsxAdapter};

/// Routes each file to the adapter registered for its format.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn with_default_adapters() -> Self {
        let adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)> = vec![
            (DocumentFormat::Txt, Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Pdf, Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>),
            (DocumentFormat::Docx, Arc::new(DocxAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Doc, Arc::new(DocAdapter) as Arc<dyn FileLoader>),
            (DocumentFormat::Xlsx, Arc::new(XlsxAdapter) as Arc<dyn FileLoader>),
        ];
        Self::new(adapters)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, file: &UploadedFile) -> Result<String, FileLoaderError> {
        let format = file.format();
        if !format.is_supported() {
            tracing::warn!(filename = %file.filename, "Unsupported file type");
            return Err(FileLoaderError::UnsupportedFormat(file.filename.clone()));
        }

        let adapter = self
            .adapters
            .get(&format)
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(file.filename.clone()))?;

        adapter.extract_text(file).await
    }
}
