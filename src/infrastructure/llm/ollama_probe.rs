use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ConnectivityProbe, ServiceUnavailable};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that Ollama answers on `/api/tags`.
pub struct OllamaProbe {
    client: Client,
    host: String,
    timeout: Duration,
}

impl OllamaProbe {
    pub fn new(host: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn classify(&self, error: reqwest::Error) -> ServiceUnavailable {
        if error.is_connect() {
            ServiceUnavailable::Unreachable {
                host: self.host.clone(),
            }
        } else if error.is_timeout() {
            ServiceUnavailable::Timeout
        } else {
            ServiceUnavailable::Unknown(error.to_string())
        }
    }
}

#[async_trait]
impl ConnectivityProbe for OllamaProbe {
    #[tracing::instrument(skip(self), fields(host = %self.host))]
    async fn check(&self) -> Result<(), ServiceUnavailable> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.host))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                let unavailable = self.classify(e);
                tracing::warn!(error = %unavailable, "Inference service probe failed");
                unavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Inference service probe unhealthy");
            return Err(ServiceUnavailable::Unhealthy {
                host: self.host.clone(),
                status: status.as_u16(),
            });
        }

        tracing::debug!("Inference service reachable");
        Ok(())
    }
}
