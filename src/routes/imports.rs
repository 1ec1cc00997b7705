use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::forms::imports::ImportForm;
use crate::importer::ProductImporter;
use crate::routes::error_response;
use crate::services::imports as imports_service;

#[post("/api/scrape_1688")]
pub async fn scrape_1688(
    form: web::Json<ImportForm>,
    importer: web::Data<dyn ProductImporter>,
) -> impl Responder {
    match imports_service::import_listing(form.into_inner(), importer.get_ref()) {
        Ok(candidate) => HttpResponse::Ok().json(json!({
            "status": "success",
            "product": candidate,
        })),
        Err(e) => error_response(&e),
    }
}
