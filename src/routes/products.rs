use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;

use crate::auth::AdminSession;
use crate::forms::products::ProductForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products as products_service;

#[get("/api/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match products_service::list_products(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => error_response(&e),
    }
}

#[post("/api/products")]
pub async fn create_product(
    _admin: AdminSession,
    form: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::create_product(form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(json!({
            "status": "success",
            "message": "商品新增成功",
            "product": product,
        })),
        Err(e) => error_response(&e),
    }
}

#[put("/api/products/{product_id}")]
pub async fn update_product(
    _admin: AdminSession,
    product_id: web::Path<i32>,
    form: web::Json<ProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::update_product(product_id.into_inner(), form.into_inner(), repo.get_ref())
    {
        Ok(product) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "商品更新成功",
            "product": product,
        })),
        Err(e) => error_response(&e),
    }
}

#[delete("/api/products/{product_id}")]
pub async fn delete_product(
    _admin: AdminSession,
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::delete_product(product_id.into_inner(), repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "商品刪除成功",
        })),
        Err(e) => error_response(&e),
    }
}
