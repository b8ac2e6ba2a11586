use super::domain::entities::Comment;
use crate::http::AppState;
use crate::modules::book::domain::entities::BookWithRelations;
use crate::shared::errors::AppResult;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    // Missing content deserializes to an empty string, which is stored as-is.
    #[serde(default)]
    pub content: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/books/{id}/comments", post(add_comment))
        .route("/api/comments/{id}", put(update_comment).delete(delete_comment))
}

async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CommentRequest>,
) -> AppResult<Json<BookWithRelations>> {
    state
        .comment_service
        .add_comment(id, request.content)
        .await
        .map(Json)
}

async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CommentRequest>,
) -> AppResult<Json<Comment>> {
    state
        .comment_service
        .update_comment(id, request.content)
        .await
        .map(Json)
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.comment_service.delete_comment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
