use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::modules::portfolio::adapter::outgoing::FileKeyValueStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Data directory must exist
#[get("/ready")]
pub async fn readiness(store: web::Data<FileKeyValueStore>) -> impl Responder {
    if store.is_available() {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: "ok",
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: "unavailable",
        })
    }
}
