//! Image attachment handlers - multipart upload and value-based removal.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::error::HttpError;
use crate::extract::ApiJson;
use crate::state::AppState;
use stockroom_core::{Product, UploadedImage, ValidationError};

/// Multipart field name carrying the files.
const IMAGES_FIELD: &str = "images";

/// Response body for a successful upload.
#[derive(Serialize)]
pub struct UploadResponse {
    pub product: Product,
    /// New `/uploads/<name>` paths, in upload order.
    pub added: Vec<String>,
}

/// Request body for removing an image by URL.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveImageRequest {
    /// Optional so a missing field surfaces as a 400 with the contract's
    /// message instead of a serde rejection.
    pub image_url: Option<String>,
}

/// Response body for a successful removal.
#[derive(Serialize)]
pub struct RemoveImageResponse {
    pub product: Product,
    pub message: String,
}

/// Upload one or more image files and append them to the product's list.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), HttpError> {
    let id = parse_id(&id)?;

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some(IMAGES_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| HttpError::BadRequest(format!("Failed to read upload: {e}")))?;
        files.push(UploadedImage {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    let appended = state.attachments.append_images(id, files).await?;
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            product: appended.product,
            added: appended.added,
        }),
    ))
}

/// Remove every occurrence of the given URL from the product's image list.
/// The file itself stays on disk.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<RemoveImageRequest>,
) -> Result<Json<RemoveImageResponse>, HttpError> {
    let id = parse_id(&id)?;
    let image_url = req
        .image_url
        .ok_or_else(|| HttpError::from(ValidationError::MissingImageUrl))?;

    let product = state.attachments.remove_image(id, &image_url).await?;
    Ok(Json(RemoveImageResponse {
        product,
        message: "Image removed successfully".to_string(),
    }))
}
