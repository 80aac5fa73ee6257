use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    api::dtos::{CategoriesResponse, ErrorResponse, MessageResponse, SearchParams, SearchResponse},
    app_state::AppState,
    category::Category,
    search::SearchError,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Service is running", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Unlisted search API is running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "search",
    responses((status = 200, description = "Accepted category labels", body = CategoriesResponse))
)]
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::labels().into_iter().map(str::to_string).collect(),
    })
}

#[utoipa::path(
    get,
    path = "/api/search-unlisted",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching videos, possibly none", body = SearchResponse),
        (status = 400, description = "Unknown category or bad page count", body = ErrorResponse),
        (status = 503, description = "Listing site unreachable", body = ErrorResponse)
    )
)]
pub async fn search_unlisted(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    if let Err(error) = params.validate(state.config.max_pages()) {
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
    }

    let query = params.into_query(state.config.default_pages());
    match state.search.search(&query).await {
        Ok(outcome) => Json(SearchResponse::from(outcome)).into_response(),
        Err(err) => search_error_response(err),
    }
}

fn search_error_response(err: SearchError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        error!("Search failed: {}", err);
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
