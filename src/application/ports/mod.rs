mod batch_observer;
mod connectivity_probe;
mod file_loader;
mod llm_client;
mod repository_error;
mod summary_repository;

pub use batch_observer::BatchObserver;
pub use connectivity_probe::{ConnectivityProbe, ServiceUnavailable};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{GenerationRequest, LlmClient, LlmClientError, SamplingOptions};
pub use repository_error::RepositoryError;
pub use summary_repository::SummaryRepository;
