use actix_web::{web, HttpResponse, Responder};

/// Liveness probe. No database access, no auth.
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
