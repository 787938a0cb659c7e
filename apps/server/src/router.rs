use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};
use whub::kernel::server::ApiState;

#[derive(OpenApi)]
#[openapi(info(title = "WordHub", description = "Letter-based word lookups"))]
struct ApiDoc;

/// Builds the application router: system routes, lookup routes and the Scalar UI at `/api`.
pub fn init(state: ApiState) -> Router {
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(whub::server::router::system_router())
        .merge(whub::server::router::lookup_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(openapi_routes).merge(Scalar::with_url("/api", api_doc))
}
