use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::category::domain::entities::Category;
use crate::modules::category::domain::repository::CategoryRepository;
use crate::modules::category::infrastructure::models::{CategoryModel, NewCategoryModel};
use crate::schema::categories;
use crate::shared::database::Database;
use crate::shared::errors::AppResult;

pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn get_all(&self) -> AppResult<Vec<Category>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<CategoryModel>> {
            let mut conn = db.get_connection()?;
            let rows = categories::table
                .order(categories::name.asc())
                .load::<CategoryModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(CategoryModel::into_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<CategoryModel>> {
            let mut conn = db.get_connection()?;
            let m = categories::table
                .find(id)
                .first::<CategoryModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(CategoryModel::into_entity))
    }

    async fn create(&self, name: String) -> AppResult<Category> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<CategoryModel> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(categories::table)
                .values(&NewCategoryModel { name })
                .get_result::<CategoryModel>(&mut conn)?;
            Ok(saved)
        })
        .await??;

        Ok(model.into_entity())
    }
}
