mod error_response;
mod health;
mod image_analysis;
mod summarize;

pub use error_response::{ErrorResponse, error_response, parse_user_id};
pub use health::{health_handler, root_handler};
pub use image_analysis::{ImageAnalysisResponse, analyze_image_handler, parse_form_bool};
pub use summarize::{FileSummaryResponse, parse_summary_settings, summarize_handler};
