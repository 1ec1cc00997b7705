use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::models::config::ServerConfig;
use crate::uploads::{UploadError, UploadImageForm, store_upload};

#[post("/api/upload")]
pub async fn upload_image(
    MultipartForm(form): MultipartForm<UploadImageForm>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let original_name = form.image.file_name.as_deref().unwrap_or("");

    match store_upload(
        form.image.file.path(),
        original_name,
        Path::new(&config.upload_dir),
    ) {
        Ok(stored_name) => HttpResponse::Ok().json(json!({
            "imageUrl": format!("/uploads/{stored_name}"),
        })),
        Err(err @ (UploadError::MissingFileName | UploadError::DisallowedExtension)) => {
            HttpResponse::BadRequest().json(json!({"status": "error", "message": err.to_string()}))
        }
        Err(UploadError::Io(e)) => {
            log::error!("Failed to store upload: {e}");
            HttpResponse::InternalServerError()
                .json(json!({"status": "error", "message": "internal error"}))
        }
    }
}
