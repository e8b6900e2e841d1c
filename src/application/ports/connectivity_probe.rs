use async_trait::async_trait;

/// Reachability check run against the inference service before generation.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn check(&self) -> Result<(), ServiceUnavailable>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceUnavailable {
    #[error(
        "Cannot connect to Ollama service at {host}. Please ensure Ollama is running. Start it with 'ollama serve' command."
    )]
    Unreachable { host: String },
    #[error("Ollama service timeout. Please check if Ollama is running properly.")]
    Timeout,
    #[error("Ollama service at {host} returned status {status}")]
    Unhealthy { host: String, status: u16 },
    #[error("Error connecting to Ollama: {0}")]
    Unknown(String),
}
