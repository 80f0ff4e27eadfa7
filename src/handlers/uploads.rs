use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use log::info;
use serde::Serialize;

use crate::errors::ApiError;
use crate::storage::ImageStorage;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub path: String,
}

/// POST /api/uploads
/// Accepts a single `file` field of multipart form data, stores the image
/// under the public directory and returns its public relative path. The file
/// is fully on disk before the response goes out.
pub async fn upload_image(
    storage: web::Data<ImageStorage>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;

        if field.name() != "file" {
            // Drain unknown fields so the stream keeps moving
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        // Only the declared media type is checked; content sniffing is out
        // of scope here.
        let declared = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_default();
        if !declared.starts_with("image/") {
            return Err(ApiError::InvalidMediaType(declared));
        }

        let original_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("file")
            .to_string();

        let mut content = Vec::new();
        while let Some(chunk) = field.next().await {
            content.extend_from_slice(&chunk?);
        }

        upload = Some((original_name, content));
        break;
    }

    let (original_name, content) = upload.ok_or(ApiError::MissingFile)?;
    let asset = storage.save_image(&original_name, &content).await?;

    info!(
        "stored image {} ({} bytes) for upload '{}'",
        asset.file_name,
        content.len(),
        original_name
    );

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        message: format!("Image '{}' uploaded", original_name),
        path: asset.public_path,
    }))
}

/// GET /images/autos/{name}
/// Streams a stored vehicle image from the public directory.
pub async fn serve_image(
    storage: web::Data<ImageStorage>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = name.into_inner();

    // Generated names never contain separators or dot-dot; anything else
    // is not one of ours.
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ApiError::BadRequest(format!("invalid image name: {}", name)));
    }

    let path = storage.upload_dir().join(&name);
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| ApiError::NotFound(format!("no such image: {}", name)))?;

    let content_type = mime_guess::from_path(&name).first_or_octet_stream();
    let stream = tokio_util::io::ReaderStream::new(file);

    Ok(HttpResponse::Ok()
        .append_header((header::CONTENT_TYPE, content_type.to_string()))
        .streaming(stream))
}
