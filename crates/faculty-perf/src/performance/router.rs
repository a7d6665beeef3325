use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{FacultyActivityBundle, FacultyId};
use super::repository::BundleRepository;
use super::service::{PerformanceService, PerformanceServiceError};

/// Router builder exposing performance scoring over HTTP.
pub fn performance_router<R>(service: Arc<PerformanceService<R>>) -> Router
where
    R: BundleRepository + 'static,
{
    Router::new()
        .route("/api/v1/faculty", get(list_handler::<R>))
        .route(
            "/api/v1/faculty/:faculty_id/performance",
            get(performance_handler::<R>),
        )
        .route(
            "/api/v1/faculty/:faculty_id/activities",
            axum::routing::put(store_handler::<R>),
        )
        .route("/api/v1/performance/score", post(score_handler::<R>))
        .with_state(service)
}

pub(crate) async fn performance_handler<R>(
    State(service): State<Arc<PerformanceService<R>>>,
    Path(faculty_id): Path<String>,
) -> Response
where
    R: BundleRepository + 'static,
{
    let id = FacultyId(faculty_id);
    match service.calculate(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<PerformanceService<R>>>,
    axum::Json(bundle): axum::Json<FacultyActivityBundle>,
) -> Response
where
    R: BundleRepository + 'static,
{
    match service.calculate_bundle(&bundle) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn store_handler<R>(
    State(service): State<Arc<PerformanceService<R>>>,
    Path(faculty_id): Path<String>,
    axum::Json(bundle): axum::Json<FacultyActivityBundle>,
) -> Response
where
    R: BundleRepository + 'static,
{
    match service.register(FacultyId(faculty_id), bundle) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<PerformanceService<R>>>) -> Response
where
    R: BundleRepository + 'static,
{
    match service.repository().faculty_ids() {
        Ok(ids) => {
            let ids: Vec<String> = ids.into_iter().map(|id| id.0).collect();
            (StatusCode::OK, axum::Json(json!({ "faculty": ids }))).into_response()
        }
        Err(err) => error_response(err.into()),
    }
}

fn error_response(err: PerformanceServiceError) -> Response {
    match err {
        PerformanceServiceError::NotFound(id) => {
            let payload = json!({
                "error": "faculty not found",
                "facultyId": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            error!(error = %other, "performance request failed");
            let payload = json!({
                "error": "failed to calculate performance",
                "detail": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
