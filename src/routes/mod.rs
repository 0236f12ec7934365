//! 라우트 구성
//!
//! ```text
//! GET  /health
//! GET  /api/v1/vendors/reviews
//! GET  /api/v1/vendors/{vendorId}/documents
//! PUT  /api/v1/vendors/{vendorId}/documents
//! PUT  /api/v1/vendors/{vendorId}/documents/status
//! POST /api/v1/vendors/{vendorId}/messages
//! GET  /api/v1/vendors/{vendorId}/messages
//! GET  /api/v1/vendors
//! POST /api/v1/vendors
//! GET  /api/v1/vendors/{vendorId}
//! PUT  /api/v1/vendors/{vendorId}
//! ```

use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::json;

use crate::config::StorageBackend;
use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_vendor_routes(cfg);
}

fn configure_vendor_routes(cfg: &mut web::ServiceConfig) {
    // `/reviews`는 `/{vendorId}`보다 먼저 등록해야 합니다
    cfg.service(
        web::scope("/api/v1/vendors")
            .service(handlers::onboarding::get_reviews)
            .service(handlers::onboarding::get_documents)
            .service(handlers::onboarding::submit_documents)
            .service(handlers::onboarding::change_status)
            .service(handlers::onboarding::send_message)
            .service(handlers::onboarding::get_messages)
            .service(handlers::vendors::get_vendors)
            .service(handlers::vendors::create_vendor)
            .service(handlers::vendors::get_vendor)
            .service(handlers::vendors::update_vendor),
    );
}

/// JSON 본문 파싱 실패는 `{message, code}` 형식의 400으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!("JSON 본문 파싱 실패: {}", err);
        AppError::BadRequest(format!("Bad request body: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Bad query: {}", err)).into()
    })
}

#[actix_web::get("/health")]
async fn health_check(backend: Option<web::Data<StorageBackend>>) -> HttpResponse {
    let storage = backend
        .map(|backend| backend.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "publisher_admin_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": storage,
    }))
}
