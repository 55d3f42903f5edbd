/// Service-level endpoints: health probe, metrics, and the root banner
use crate::metrics;
use crate::openapi::ApiDoc;
use actix_web::web;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn index() -> String {
    format!("{} {}", ApiDoc::title(), ApiDoc::version())
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/metrics", web::get().to(metrics::serve_metrics))
        .route("/", web::get().to(index));
}
