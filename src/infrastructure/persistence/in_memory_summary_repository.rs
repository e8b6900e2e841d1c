use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, SummaryRepository};
use crate::domain::{ImageAnalysisRecord, SummaryRecord};

/// Keeps records in process memory. Used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemorySummaryRepository {
    summaries: Mutex<Vec<SummaryRecord>>,
    image_analyses: Mutex<Vec<ImageAnalysisRecord>>,
}

impl InMemorySummaryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summaries(&self) -> Vec<SummaryRecord> {
        self.summaries
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn image_analyses(&self) -> Vec<ImageAnalysisRecord> {
        self.image_analyses
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SummaryRepository for InMemorySummaryRepository {
    async fn save_summary(&self, record: &SummaryRecord) -> Result<(), RepositoryError> {
        self.summaries
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
            .push(record.clone());
        Ok(())
    }

    async fn save_image_analysis(
        &self,
        record: &ImageAnalysisRecord,
    ) -> Result<(), RepositoryError> {
        self.image_analyses
            .lock()
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}
