use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    SummaryLength, SummaryOutcome, SummarySettings, SummaryStyle, UploadedFile, UserId,
};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::{error_response, parse_user_id};

#[derive(Serialize)]
#[serde(untagged)]
pub enum FileSummaryResponse {
    Summary {
        #[serde(rename = "fileName")]
        file_name: String,
        summary: String,
    },
    Error {
        #[serde(rename = "fileName")]
        file_name: String,
        error: String,
    },
}

impl From<SummaryOutcome> for FileSummaryResponse {
    fn from(outcome: SummaryOutcome) -> Self {
        match outcome {
            SummaryOutcome::Summarized { file_name, summary } => {
                Self::Summary { file_name, summary }
            }
            SummaryOutcome::Failed { file_name, error } => Self::Error { file_name, error },
        }
    }
}

struct SummarizeForm {
    files: Vec<UploadedFile>,
    settings_json: Option<String>,
    user_id: Option<UserId>,
}

async fn read_form(multipart: &mut Multipart) -> Result<SummarizeForm, Response> {
    let mut form = SummarizeForm {
        files: Vec::new(),
        settings_json: None,
        user_id: None,
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {e}"),
                ));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::error!(error = %e, filename = %filename, "Failed to read file bytes");
                    error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {e}"))
                })?;
                let position = form.files.len();
                form.files
                    .push(UploadedFile::new(filename, data.to_vec(), position));
            }
            "settings_json" | "user_id" => {
                let text = field.text().await.map_err(|e| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read field {name}: {e}"),
                    )
                })?;
                if name == "user_id" {
                    form.user_id = parse_user_id(&text)?;
                } else {
                    form.settings_json = Some(text);
                }
            }
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Reads `{length, style, userQuery}`; anything missing or unreadable keeps its default.
pub fn parse_summary_settings(raw: Option<&str>) -> SummarySettings {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return SummarySettings::default();
    };

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            tracing::warn!("Settings are not a JSON object, using defaults");
            return SummarySettings::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Error parsing settings, using defaults");
            return SummarySettings::default();
        }
    };

    let field = |key: &str| value.get(key).and_then(Value::as_str);
    let settings = SummarySettings::new(
        field("length")
            .map(SummaryLength::from_name_or_default)
            .unwrap_or_default(),
        field("style")
            .map(SummaryStyle::from_name_or_default)
            .unwrap_or_default(),
        field("userQuery").map(str::to_string),
    );

    tracing::info!(
        length = %settings.length,
        style = %settings.style,
        user_query = %sanitize_prompt(settings.user_instruction.as_deref().unwrap_or_default()),
        "Summary settings"
    );
    settings
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    if form.files.is_empty() {
        tracing::warn!("Summarize request with no files");
        return error_response(StatusCode::BAD_REQUEST, "No files uploaded");
    }

    tracing::info!(
        file_count = form.files.len(),
        total_bytes = form.files.iter().map(UploadedFile::size_bytes).sum::<u64>(),
        "Received summarization request"
    );

    let settings = parse_summary_settings(form.settings_json.as_deref());
    let result = state
        .batch_summarizer
        .run(form.files, &settings, form.user_id)
        .await;

    let body: Vec<FileSummaryResponse> = result
        .into_outcomes()
        .into_iter()
        .map(FileSummaryResponse::from)
        .collect();

    (StatusCode::OK, Json(body)).into_response()
}
