use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, SummaryRepository};
use crate::domain::{ImageAnalysisRecord, SummaryRecord};

pub struct PgSummaryRepository {
    pool: PgPool,
}

impl PgSummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SummaryRepository for PgSummaryRepository {
    #[instrument(skip(self, record), fields(user_id = %record.user_id, file_name = %record.file_name))]
    async fn save_summary(&self, record: &SummaryRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO summaries
                (user_id, file_name, original_text, summary_text,
                 summary_length, summary_style, user_prompt, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(record.user_id.as_i64())
        .bind(&record.file_name)
        .bind(&record.original_text)
        .bind(&record.summary_text)
        .bind(record.settings.length.as_str())
        .bind(record.settings.style.as_str())
        .bind(record.settings.user_instruction.as_deref())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self, record), fields(user_id = %record.user_id, image_name = %record.image_name))]
    async fn save_image_analysis(
        &self,
        record: &ImageAnalysisRecord,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO image_analyses (user_id, image_name, analysis_text, story_text, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.user_id.as_i64())
        .bind(&record.image_name)
        .bind(&record.analysis_text)
        .bind(record.story_text.as_deref())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
