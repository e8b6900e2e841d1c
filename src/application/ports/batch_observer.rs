use super::RepositoryError;

/// Receives progress events from a summarization batch.
pub trait BatchObserver: Send + Sync {
    fn batch_started(&self, file_count: usize);

    fn file_started(&self, position: usize, file_name: &str);

    fn file_summarized(&self, file_name: &str, summary_chars: usize);

    fn file_failed(&self, file_name: &str, error: &str);

    fn persistence_failed(&self, file_name: &str, error: &RepositoryError);

    fn batch_completed(&self, file_count: usize, succeeded: usize);
}
