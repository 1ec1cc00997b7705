use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::auth::AdminSession;
use crate::forms::orders::OrderForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::orders as orders_service;

#[get("/api/orders")]
pub async fn list_orders(
    _admin: AdminSession,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders_service::list_all_orders(repo.get_ref()) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => error_response(&e),
    }
}

#[get("/api/orders/{paopaohu_id}")]
pub async fn list_customer_orders(
    paopaohu_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders_service::list_customer_orders(&paopaohu_id, repo.get_ref()) {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(e) => error_response(&e),
    }
}

#[post("/api/orders")]
pub async fn create_order(
    form: web::Json<OrderForm>,
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match orders_service::create_order(form.into_inner(), &config.default_warehouse, repo.get_ref())
    {
        Ok(order) => HttpResponse::Created().json(json!({
            "status": "success",
            "order": order,
        })),
        Err(e) => error_response(&e),
    }
}
