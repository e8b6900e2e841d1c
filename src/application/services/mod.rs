mod batch_summarizer;
mod image_analysis_service;
mod prompt_builder;
mod summarization_service;

pub use batch_summarizer::{BatchSummarizer, EMPTY_DOCUMENT_MESSAGE, FileProcessingError};
pub use image_analysis_service::{
    ANALYSIS_PROMPT, DEFAULT_STORY_INSTRUCTION, ImageAnalysisError, ImageAnalysisService,
    story_prompt_for,
};
pub use prompt_builder::{
    MAX_PROMPT_TEXT_CHARS, build_summary_prompt, length_directive, style_directive,
};
pub use summarization_service::{SummarizationError, SummarizationService};
