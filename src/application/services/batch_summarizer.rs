use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::application::ports::{BatchObserver, FileLoader, FileLoaderError, SummaryRepository};
use crate::domain::{
    BatchResult, SummaryOutcome, SummaryRecord, SummarySettings, UploadedFile, UserId,
};

use super::summarization_service::{SummarizationError, SummarizationService};

pub const EMPTY_DOCUMENT_MESSAGE: &str = "File is empty or contains no readable text";

/// Runs extraction and summarization over the files of one request.
///
/// Files are processed one after another in upload order. A failure is recorded in
/// that file's outcome and never stops the batch.
pub struct BatchSummarizer {
    file_loader: Arc<dyn FileLoader>,
    summarizer: Arc<SummarizationService>,
    repository: Option<Arc<dyn SummaryRepository>>,
    observer: Arc<dyn BatchObserver>,
}

impl BatchSummarizer {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        summarizer: Arc<SummarizationService>,
        repository: Option<Arc<dyn SummaryRepository>>,
        observer: Arc<dyn BatchObserver>,
    ) -> Self {
        Self {
            file_loader,
            summarizer,
            repository,
            observer,
        }
    }

    pub async fn run(
        &self,
        files: Vec<UploadedFile>,
        settings: &SummarySettings,
        requester: Option<UserId>,
    ) -> BatchResult {
        let file_count = files.len();
        self.observer.batch_started(file_count);

        let outcomes = stream::iter(files)
            .fold(
                Vec::with_capacity(file_count),
                |mut outcomes, file| async move {
                    outcomes.push(self.process_file(&file, settings, requester).await);
                    outcomes
                },
            )
            .await;

        let result = BatchResult::new(outcomes);
        self.observer.batch_completed(result.len(), result.succeeded());
        result
    }

    async fn process_file(
        &self,
        file: &UploadedFile,
        settings: &SummarySettings,
        requester: Option<UserId>,
    ) -> SummaryOutcome {
        self.observer.file_started(file.position, &file.filename);

        match self.summarize_file(file, settings).await {
            Ok((text, summary)) => {
                self.observer
                    .file_summarized(&file.filename, summary.chars().count());
                if let Some(user_id) = requester {
                    self.persist(user_id, file, &text, &summary, settings).await;
                }
                SummaryOutcome::summarized(file.filename.clone(), summary)
            }
            Err(e) => {
                let message = e.to_string();
                self.observer.file_failed(&file.filename, &message);
                SummaryOutcome::failed(file.filename.clone(), message)
            }
        }
    }

    async fn summarize_file(
        &self,
        file: &UploadedFile,
        settings: &SummarySettings,
    ) -> Result<(String, String), FileProcessingError> {
        let text = self.file_loader.extract_text(file).await?;

        if text.trim().is_empty() {
            return Err(FileProcessingError::EmptyDocument);
        }

        let summary = self.summarizer.summarize(&text, settings).await?;
        Ok((text, summary))
    }

    async fn persist(
        &self,
        user_id: UserId,
        file: &UploadedFile,
        text: &str,
        summary: &str,
        settings: &SummarySettings,
    ) {
        let Some(repository) = &self.repository else {
            return;
        };

        let record = SummaryRecord::new(
            user_id,
            file.filename.clone(),
            text,
            summary.to_string(),
            settings.clone(),
        );

        if let Err(e) = repository.save_summary(&record).await {
            self.observer.persistence_failed(&file.filename, &e);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileProcessingError {
    #[error(transparent)]
    Extraction(#[from] FileLoaderError),
    #[error("{}", EMPTY_DOCUMENT_MESSAGE)]
    EmptyDocument,
    #[error(transparent)]
    Summarization(#[from] SummarizationError),
}
