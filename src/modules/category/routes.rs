use super::domain::entities::Category;
use crate::http::AppState;
use crate::shared::errors::AppResult;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/categories", get(get_categories).post(create_category))
}

async fn get_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    state.category_service.get_categories().await.map(Json)
}

async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> AppResult<Json<Category>> {
    state
        .category_service
        .create_category(request.name)
        .await
        .map(Json)
}
