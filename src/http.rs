//! HTTP transport: application state, router assembly and the mapping from
//! the error taxonomy to status codes. Every handler is a thin pass-through
//! to a service; no logic lives here.

use crate::log_error;
use crate::modules::{
    book::{routes as book_routes, BookService},
    category::{routes as category_routes, CategoryService},
    comment::{routes as comment_routes, CommentService},
};
use crate::shared::database::{Database, PoolStatus};
use crate::shared::errors::AppError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Application state available to all handlers
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub book_service: Arc<BookService>,
    pub category_service: Arc<CategoryService>,
    pub comment_service: Arc<CommentService>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// AppError serializes as {"type": ..., "message": ...}, which doubles as the
// wire shape for error responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log_error!("Request failed: {}", self);
        }
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthcheckResponse {
    status: &'static str,
    pool: PoolStatus,
}

async fn healthcheck(State(state): State<AppState>) -> Json<HealthcheckResponse> {
    Json(HealthcheckResponse {
        status: "ok",
        pool: state.database.pool_status(),
    })
}

/// Assemble the full router over the shared application state
pub fn make_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(book_routes::router())
        .merge(category_routes::router())
        .merge(comment_routes::router())
        .with_state(state)
}
