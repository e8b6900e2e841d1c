use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationRequest, LlmClient, LlmClientError, SamplingOptions};
use crate::infrastructure::observability::sanitize_prompt;

/// Non-streaming client for Ollama's `/api/generate` endpoint.
pub struct OllamaClient {
    client: Client,
    host: String,
}

#[derive(Serialize)]
struct GenerateRequestBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    images: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OptionsBody>,
}

#[derive(Serialize)]
struct OptionsBody {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

impl From<SamplingOptions> for OptionsBody {
    fn from(options: SamplingOptions) -> Self {
        Self {
            temperature: options.temperature,
            top_p: options.top_p,
            top_k: options.top_k,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponseBody {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl OllamaClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Sorts an error reported during generation into the client error kinds.
///
/// Ollama reports failures as free text, so the kind is recovered from the message.
pub fn classify_generation_failure(model: &str, message: &str) -> LlmClientError {
    let lowered = message.to_lowercase();
    if lowered.contains("model") && lowered.contains("not found") {
        LlmClientError::ModelNotFound(model.to_string())
    } else if lowered.contains("connection") {
        LlmClientError::ConnectionLost(message.to_string())
    } else {
        LlmClientError::GenerationFailed(message.to_string())
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    #[tracing::instrument(
        skip(self, request),
        fields(model = %request.model, images = request.images.len())
    )]
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmClientError> {
        tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Sending generation request");

        let body = GenerateRequestBody {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
            images: &request.images,
            options: request.options.map(OptionsBody::from),
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.host))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LlmClientError::ConnectionLost(e.to_string())
                } else {
                    classify_generation_failure(&request.model, &e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, text));
            return Err(classify_generation_failure(&request.model, &message));
        }

        let generated: GenerateResponseBody = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Unreadable generation response");
            LlmClientError::MalformedResponse
        })?;

        generated.response.ok_or(LlmClientError::MalformedResponse)
    }
}

