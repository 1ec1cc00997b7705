use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::auth::SessionStore;
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/api/admin/login")]
pub async fn admin_login(
    form: web::Json<LoginForm>,
    repo: web::Data<DieselRepository>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    match auth_service::login(form.into_inner(), repo.get_ref(), sessions.get_ref()) {
        Ok(token) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": "登入成功",
            "token": token,
        })),
        Err(e) => error_response(&e),
    }
}
