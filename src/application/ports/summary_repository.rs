use async_trait::async_trait;

use crate::domain::{ImageAnalysisRecord, SummaryRecord};

use super::RepositoryError;

/// Insert-only store for finished summaries and image analyses.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    async fn save_summary(&self, record: &SummaryRecord) -> Result<(), RepositoryError>;

    async fn save_image_analysis(
        &self,
        record: &ImageAnalysisRecord,
    ) -> Result<(), RepositoryError>;
}
