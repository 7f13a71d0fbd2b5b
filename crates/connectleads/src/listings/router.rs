use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::JobCatalog;
use super::domain::Job;
use super::filter::JobFilter;
use super::gateway::{ListingGateway, SearchRequest};

/// Shared state for the listing routes: the live-search gateway plus the
/// curated catalog.
pub struct ListingContext {
    pub gateway: ListingGateway,
    pub catalog: JobCatalog,
}

/// Router builder exposing the listing search, catalog, and filter
/// endpoints.
pub fn listing_router(context: Arc<ListingContext>) -> Router {
    Router::new()
        .route("/api/v1/listings", get(catalog_handler))
        .route("/api/v1/listings/search", post(search_handler))
        .route("/api/v1/listings/filter", post(filter_handler))
        .route("/api/v1/listings/:job_id", get(detail_handler))
        .with_state(context)
}

#[derive(Debug, Serialize)]
struct CatalogResponse {
    total: usize,
    data: Vec<Job>,
}

impl CatalogResponse {
    fn new(data: Vec<Job>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}

pub(crate) async fn search_handler(
    State(context): State<Arc<ListingContext>>,
    Json(request): Json<SearchRequest>,
) -> Response {
    let report = context.gateway.search(request).await;
    let status = if report.was_rejected() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(report)).into_response()
}

pub(crate) async fn catalog_handler(
    State(context): State<Arc<ListingContext>>,
) -> Json<CatalogResponse> {
    Json(CatalogResponse::new(context.catalog.jobs().to_vec()))
}

pub(crate) async fn filter_handler(
    State(context): State<Arc<ListingContext>>,
    Json(filter): Json<JobFilter>,
) -> Json<CatalogResponse> {
    Json(CatalogResponse::new(filter.apply(context.catalog.jobs())))
}

pub(crate) async fn detail_handler(
    State(context): State<Arc<ListingContext>>,
    Path(job_id): Path<String>,
) -> Response {
    match context.catalog.job_by_id(&job_id) {
        Some(job) => (StatusCode::OK, Json(job.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("no listing with id {job_id}"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
