mod document_format;
mod image_analysis;
mod records;
mod summary_outcome;
mod summary_settings;
mod text;
mod uploaded_file;
mod user_id;

pub use document_format::DocumentFormat;
pub use image_analysis::ImageAnalysis;
pub use records::{ImageAnalysisRecord, MAX_STORED_ORIGINAL_CHARS, SummaryRecord};
pub use summary_outcome::{BatchResult, SummaryOutcome};
pub use summary_settings::{SummaryLength, SummarySettings, SummaryStyle};
pub use text::truncate_chars;
pub use uploaded_file::UploadedFile;
pub use user_id::UserId;
