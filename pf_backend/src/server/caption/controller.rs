use crate::domain::caption::entity::{CaptionRequest, UploadedFile};
use crate::error::{ErrorBackend, Result, ResultAPI};
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::{Multipart, State};
use pf_core::server::payload::caption_response::CaptionResponse;
use pf_core::types::platform::{DEFAULT_PLATFORM, DEFAULT_TONE, or_default};
use std::sync::Arc;
use tracing::debug;

pub async fn improve_caption_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> ResultAPI<CaptionResponse> {
    let req = read_caption_form(multipart).await?;
    let response = state.service_caption.improve_caption(req).await?;
    Ok(Json(response))
}

/// Reads the `sentence`, `platform`, `tone` and `file` form fields. Other
/// fields are skipped.
async fn read_caption_form(mut multipart: Multipart) -> Result<CaptionRequest> {
    let mut sentence: Option<String> = None;
    let mut platform: Option<String> = None;
    let mut tone: Option<String> = None;
    let mut image: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("sentence") => sentence = Some(field.text().await?),
            Some("platform") => platform = Some(field.text().await?),
            Some("tone") => tone = Some(field.text().await?),
            Some("file") => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let file = UploadedFile {
                    filename,
                    content_type,
                    data: field.bytes().await?,
                };
                if file.is_empty() {
                    continue;
                }
                debug!(
                    "Received file {:?} ({}, {} bytes)",
                    file.filename,
                    file.content_type.as_deref().unwrap_or("unknown type"),
                    file.data.len()
                );
                image = Some(file);
            }
            _ => {}
        }
    }

    let content_text = sentence
        .filter(|s| !s.trim().is_empty())
        .ok_or(ErrorBackend::MissingField("sentence"))?;

    Ok(CaptionRequest {
        content_text,
        platform: or_default(platform.as_deref(), DEFAULT_PLATFORM),
        tone: or_default(tone.as_deref(), DEFAULT_TONE),
        image,
    })
}
