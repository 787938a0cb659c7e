use super::health;
use axum::extract::FromRef;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use whub_database::Database;

/// Routes every server exposes regardless of enabled slices (`/health`).
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    Database: FromRef<S>,
{
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}
