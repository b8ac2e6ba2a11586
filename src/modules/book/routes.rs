use super::domain::entities::{Book, BookWithRelations, NewBook};
use crate::http::AppState;
use crate::shared::errors::AppResult;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateBookRequest {
    pub rating: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(get_books).post(create_book))
        .route("/api/books/{id}", get(get_book))
        .route("/api/books/{id}/ratings", post(rate_book))
}

async fn get_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    state.book_service.get_books().await.map(Json)
}

async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookWithRelations>> {
    state.book_service.get_book(id).await.map(Json)
}

async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<NewBook>,
) -> AppResult<Json<Book>> {
    state.book_service.create_book(request).await.map(Json)
}

async fn rate_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<RateBookRequest>,
) -> AppResult<Json<BookWithRelations>> {
    state
        .book_service
        .rate_book(id, request.rating)
        .await
        .map(Json)
}
