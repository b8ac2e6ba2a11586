use crate::modules::category::domain::entities::Category;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>>;

    async fn create(&self, name: String) -> AppResult<Category>;
}
