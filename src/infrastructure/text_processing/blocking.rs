use crate::application::ports::FileLoaderError;

/// Runs a CPU-bound parser on the blocking pool and folds its error into
/// [`FileLoaderError::ExtractionFailed`].
pub(super) async fn run_parser<F>(filename: &str, parse: F) -> Result<String, FileLoaderError>
where
    F: FnOnce() -> Result<String, String> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| FileLoaderError::extraction_failed(filename, format!("task join error: {e}")))?
        .map_err(|cause| FileLoaderError::extraction_failed(filename, cause))
}
