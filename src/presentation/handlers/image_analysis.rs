use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{ImageAnalysis, UserId};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::{error_response, parse_user_id};

#[derive(Serialize)]
pub struct ImageAnalysisResponse {
    pub analysis: String,
    pub story: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl From<ImageAnalysis> for ImageAnalysisResponse {
    fn from(analysis: ImageAnalysis) -> Self {
        Self {
            analysis: analysis.analysis,
            story: analysis.story,
            file_name: analysis.file_name,
        }
    }
}

struct ImageForm {
    image: Option<(String, Vec<u8>)>,
    generate_story: bool,
    story_prompt: Option<String>,
    user_id: Option<UserId>,
}

/// Form booleans as browsers and HTML forms send them.
pub fn parse_form_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" | "" => Some(false),
        _ => None,
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<ImageForm, Response> {
    let mut form = ImageForm {
        image: None,
        generate_story: false,
        story_prompt: None,
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
        if name == "image" {
            let filename = field.file_name().unwrap_or("unknown").to_string();
            let data = field.bytes().await.map_err(|e| {
                error_response(StatusCode::BAD_REQUEST, format!("Failed to read file: {e}"))
            })?;
            form.image = Some((filename, data.to_vec()));
            continue;
        }

        let text = field.text().await.map_err(|e| {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read field {name}: {e}"),
            )
        })?;
        match name.as_str() {
            "generate_story" => {
                form.generate_story = parse_form_bool(&text).ok_or_else(|| {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        format!("Invalid generate_story: {text}"),
                    )
                })?;
            }
            "story_prompt" => form.story_prompt = Some(text).filter(|t| !t.trim().is_empty()),
            "user_id" => form.user_id = parse_user_id(&text)?,
            other => tracing::debug!(field = %other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some((file_name, image)) = form.image else {
        tracing::warn!("Image analysis request with no image");
        return error_response(StatusCode::BAD_REQUEST, "No image uploaded");
    };

    tracing::info!(
        file_name = %file_name,
        image_bytes = image.len(),
        generate_story = form.generate_story,
        story_prompt = %sanitize_prompt(form.story_prompt.as_deref().unwrap_or_default()),
        "Received image analysis request"
    );

    match state
        .image_analysis_service
        .analyze(
            &file_name,
            &image,
            form.generate_story,
            form.story_prompt.as_deref(),
            form.user_id,
        )
        .await
    {
        Ok(analysis) => (
            StatusCode::OK,
            Json(ImageAnalysisResponse::from(analysis)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Image analysis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
