pub mod dtos;
pub mod handlers;

use axum::{Router, routing::get};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, health};

#[derive(OpenApi)]
#[openapi(
    info(title = "Unlisted search API", description = "Search unlisted videos by keyword, category or channel"),
    paths(
        handlers::root,
        handlers::list_categories,
        handlers::search_unlisted,
        health::health_check
    ),
    tags(
        (name = "search", description = "Unlisted video search"),
        (name = "meta", description = "Service information"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(health::health_check))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/search-unlisted", get(handlers::search_unlisted))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
