use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod auth;
pub mod imports;
pub mod orders;
pub mod products;
pub mod uploads;

/// Map a service failure to its HTTP response. Bodies carry a structured
/// message and never leak internal detail.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({"status": "error", "message": err.to_string()});
    match err {
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(body),
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Import(_) | ServiceError::Internal => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}
