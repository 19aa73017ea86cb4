// POST /analyze — upload a document, get sentiment, entities, and topics.
//
// Validation order: file part present → filename non-empty → extension in
// the whitelist → extraction yields non-empty text. The first failing check
// determines the error; all of them are 400s with messages safe to show
// the client verbatim.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, info};

use crate::extract::{extract_text, DocumentKind};
use crate::pipeline::{analyze_document, AnalysisResult};
use crate::web::error::ApiError;
use crate::web::AppState;

pub async fn analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ApiError> {
    // Find the `file` field; other fields are ignored.
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (filename, data) = upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".into()))?;

    if filename.is_empty() {
        return Err(ApiError::BadRequest("No selected file".into()));
    }

    let kind = DocumentKind::from_filename(&filename)
        .ok_or_else(|| ApiError::BadRequest("File type not allowed".into()))?;

    debug!(%filename, bytes = data.len(), "Processing upload");

    // Malformed documents and decode failures are the uploader's problem.
    let text = extract_text(&data, kind).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if text.is_empty() {
        return Err(ApiError::BadRequest(
            "No text could be extracted from the file".into(),
        ));
    }

    let result = analyze_document(&state.analyzers, &text)?;

    info!(
        %filename,
        chars = text.len(),
        sentiment = %result.sentiment.label,
        entity_labels = result.entities.len(),
        topics = result.topics.len(),
        "Analysis complete"
    );
    Ok(Json(result))
}
