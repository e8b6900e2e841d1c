use crate::application::ports::{BatchObserver, RepositoryError};

/// Reports batch progress as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBatchObserver;

impl BatchObserver for TracingBatchObserver {
    fn batch_started(&self, file_count: usize) {
        tracing::info!(file_count, "Summarization batch started");
    }

    fn file_started(&self, position: usize, file_name: &str) {
        tracing::info!(position, file_name, "Processing file");
    }

    fn file_summarized(&self, file_name: &str, summary_chars: usize) {
        tracing::info!(file_name, summary_chars, "File summarized");
    }

    fn file_failed(&self, file_name: &str, error: &str) {
        tracing::error!(file_name, error, "File failed");
    }

    fn persistence_failed(&self, file_name: &str, error: &RepositoryError) {
        tracing::error!(file_name, error = %error, "Failed to save summary");
    }

    fn batch_completed(&self, file_count: usize, succeeded: usize) {
        tracing::info!(
            file_count,
            succeeded,
            failed = file_count - succeeded,
            "Summarization batch completed"
        );
    }
}
