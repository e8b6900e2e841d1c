use std::sync::Arc;

use crate::application::services::{BatchSummarizer, ImageAnalysisService};

#[derive(Clone)]
pub struct AppState {
    pub batch_summarizer: Arc<BatchSummarizer>,
    pub image_analysis_service: Arc<ImageAnalysisService>,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}
