// src/handlers/health.rs
// DOCUMENTATION: Root welcome and health check handlers
// PURPOSE: Simple endpoints to greet clients and verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Employee Feedback API!"
    }))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "feedback-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check));
}
