use super::super::domain::{entities::Category, repository::CategoryRepository};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;
use std::sync::Arc;

pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn get_categories(&self) -> AppResult<Vec<Category>> {
        let categories = self.category_repo.get_all().await?;

        Ok(categories)
    }

    pub async fn create_category(&self, name: String) -> AppResult<Category> {
        Validator::validate_category_name(&name)?;

        let saved = self.category_repo.create(name).await?;

        Ok(saved)
    }
}
