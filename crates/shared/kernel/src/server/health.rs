use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::{Json, response::IntoResponse};
use std::sync::LazyLock;
use std::time::Instant;
use whub_database::Database;
use whub_derive::{api_handler, api_model};
use whub_domain::constants::SYSTEM_TAG;

#[api_model]
/// Health check response
struct HealthResponse {
    /// `up`, or `degraded` when the word store does not answer
    status: &'static str,
    /// Version
    version: &'static str,
    /// Uptime in seconds
    uptime: u64,
    /// Whether the word store answered its health check
    database: bool,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Service and word store are up", body = HealthResponse),
        (
            status = SERVICE_UNAVAILABLE,
            description = "Word store is unreachable",
            body = HealthResponse
        ),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(db): State<Database>) -> impl IntoResponse {
    let database = db.health().await.is_ok();
    let (code, status) = if database {
        (StatusCode::OK, "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
        database,
    };

    (
        code,
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
