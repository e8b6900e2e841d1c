use chrono::{DateTime, Utc};

use super::{SummarySettings, UserId, truncate_chars};

pub const MAX_STORED_ORIGINAL_CHARS: usize = 5_000;

/// A successful summary as handed to the persistence store.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub user_id: UserId,
    pub file_name: String,
    pub original_text: String,
    pub summary_text: String,
    pub settings: SummarySettings,
    pub created_at: DateTime<Utc>,
}

impl SummaryRecord {
    pub fn new(
        user_id: UserId,
        file_name: String,
        original_text: &str,
        summary_text: String,
        settings: SummarySettings,
    ) -> Self {
        Self {
            user_id,
            file_name,
            original_text: truncate_chars(original_text, MAX_STORED_ORIGINAL_CHARS).to_string(),
            summary_text,
            settings,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysisRecord {
    pub user_id: UserId,
    pub image_name: String,
    pub analysis_text: String,
    pub story_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ImageAnalysisRecord {
    pub fn new(
        user_id: UserId,
        image_name: String,
        analysis_text: String,
        story_text: Option<String>,
    ) -> Self {
        Self {
            user_id,
            image_name,
            analysis_text,
            story_text,
            created_at: Utc::now(),
        }
    }
}
