use actix_web::{web, HttpResponse};
use company_registry_api_structs::get_registry_status::APIResponse;

/// Answers without touching storage
async fn registry_status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    ))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(registry_status));
}
