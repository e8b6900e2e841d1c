mod ollama_client;
mod ollama_probe;

pub use ollama_client::{OllamaClient, classify_generation_failure};
pub use ollama_probe::{DEFAULT_PROBE_TIMEOUT, OllamaProbe};
