use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::application::ports::{GenerationRequest, LlmClient, LlmClientError, SummaryRepository};
use crate::domain::{ImageAnalysis, ImageAnalysisRecord, UserId};

pub const ANALYSIS_PROMPT: &str =
    "Describe this image in detail. What do you see? What is happening?";
pub const DEFAULT_STORY_INSTRUCTION: &str =
    "Create an engaging short story based on this image.";

pub struct ImageAnalysisService {
    llm_client: Arc<dyn LlmClient>,
    repository: Option<Arc<dyn SummaryRepository>>,
    vision_model: String,
}

impl ImageAnalysisService {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        repository: Option<Arc<dyn SummaryRepository>>,
        vision_model: String,
    ) -> Self {
        Self {
            llm_client,
            repository,
            vision_model,
        }
    }

    #[tracing::instrument(
        skip(self, image, story_prompt),
        fields(image_bytes = image.len(), model = %self.vision_model)
    )]
    pub async fn analyze(
        &self,
        file_name: &str,
        image: &[u8],
        generate_story: bool,
        story_prompt: Option<&str>,
        requester: Option<UserId>,
    ) -> Result<ImageAnalysis, ImageAnalysisError> {
        let encoded = STANDARD.encode(image);

        let analysis_request = GenerationRequest::new(self.vision_model.clone(), ANALYSIS_PROMPT)
            .with_images(vec![encoded.clone()]);
        let analysis = self.llm_client.generate(&analysis_request).await?;
        tracing::info!(analysis_chars = analysis.chars().count(), "Image analysis generated");

        let story = if generate_story {
            let request =
                GenerationRequest::new(self.vision_model.clone(), story_prompt_for(story_prompt))
                    .with_images(vec![encoded]);
            let story = self.llm_client.generate(&request).await?;
            tracing::info!(story_chars = story.chars().count(), "Image story generated");
            Some(story)
        } else {
            None
        };

        if let (Some(user_id), Some(repository)) = (requester, &self.repository) {
            let record = ImageAnalysisRecord::new(
                user_id,
                file_name.to_string(),
                analysis.clone(),
                story.clone(),
            );
            if let Err(e) = repository.save_image_analysis(&record).await {
                tracing::error!(
                    error = %e,
                    image_name = %file_name,
                    "Failed to store image analysis"
                );
            }
        }

        Ok(ImageAnalysis {
            file_name: file_name.to_string(),
            analysis,
            story,
        })
    }
}

/// Builds the story prompt, using the default instruction when none was given.
pub fn story_prompt_for(instruction: Option<&str>) -> String {
    let instruction = instruction
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_STORY_INSTRUCTION);
    format!("{instruction}\n\nBased on the image, write a creative story (200-300 words):")
}

#[derive(Debug, thiserror::Error)]
pub enum ImageAnalysisError {
    #[error("Error analyzing image: {0}")]
    Generation(#[from] LlmClientError),
}
