use std::sync::Arc;

use crate::application::ports::{
    ConnectivityProbe, GenerationRequest, LlmClient, LlmClientError, SamplingOptions,
    ServiceUnavailable,
};
use crate::domain::SummarySettings;

use super::prompt_builder::build_summary_prompt;

pub struct SummarizationService {
    probe: Arc<dyn ConnectivityProbe>,
    llm_client: Arc<dyn LlmClient>,
    model: String,
    sampling: SamplingOptions,
}

impl SummarizationService {
    pub fn new(
        probe: Arc<dyn ConnectivityProbe>,
        llm_client: Arc<dyn LlmClient>,
        model: String,
        sampling: SamplingOptions,
    ) -> Self {
        Self {
            probe,
            llm_client,
            model,
            sampling,
        }
    }

    /// Summarizes `text`. The inference service is probed before every call.
    #[tracing::instrument(
        skip(self, text, settings),
        fields(
            model = %self.model,
            text_chars = text.chars().count(),
            length = %settings.length,
            style = %settings.style,
        )
    )]
    pub async fn summarize(
        &self,
        text: &str,
        settings: &SummarySettings,
    ) -> Result<String, SummarizationError> {
        self.probe.check().await?;

        let prompt = build_summary_prompt(text, settings);
        let request =
            GenerationRequest::new(self.model.clone(), prompt).with_options(self.sampling);

        tracing::debug!("Calling inference service to generate summary");
        let generated = self
            .llm_client
            .generate(&request)
            .await
            .map_err(|e| SummarizationError::from_client_error(&self.model, e))?;

        let summary = generated.trim();
        if summary.is_empty() {
            return Err(SummarizationError::MalformedResponse);
        }

        tracing::info!(summary_chars = summary.chars().count(), "Summary generated");
        Ok(summary.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummarizationError {
    #[error(transparent)]
    ServiceUnavailable(#[from] ServiceUnavailable),
    #[error("Model '{0}' not found. Please run: ollama pull {0}")]
    ModelNotFound(String),
    #[error("Ollama returned empty response")]
    MalformedResponse,
    #[error("Lost connection to Ollama service. Please check if Ollama is still running.")]
    ConnectionLost,
    #[error("Error generating summary: {0}")]
    GenerationError(String),
}

impl SummarizationError {
    fn from_client_error(model: &str, error: LlmClientError) -> Self {
        tracing::error!(error = %error, "Inference service generation error");
        match error {
            LlmClientError::ModelNotFound(_) => Self::ModelNotFound(model.to_string()),
            LlmClientError::MalformedResponse => Self::MalformedResponse,
            LlmClientError::ConnectionLost(_) => Self::ConnectionLost,
            LlmClientError::GenerationFailed(detail) => Self::GenerationError(detail),
        }
    }
}
