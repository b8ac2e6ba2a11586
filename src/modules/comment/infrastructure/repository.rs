use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::comment::domain::entities::Comment;
use crate::modules::comment::domain::repository::CommentRepository;
use crate::modules::comment::infrastructure::models::{CommentModel, NewCommentModel};
use crate::schema::comments;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct CommentRepositoryImpl {
    db: Arc<Database>,
}

impl CommentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryImpl {
    async fn insert(&self, book_id: i32, content: String) -> AppResult<Comment> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<CommentModel> {
            let mut conn = db.get_connection()?;
            // created_at comes from the column default (NOW())
            let saved = diesel::insert_into(comments::table)
                .values(&NewCommentModel { book_id, content })
                .get_result::<CommentModel>(&mut conn)?;
            Ok(saved)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<Comment>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<CommentModel>> {
            let mut conn = db.get_connection()?;
            let rows = comments::table
                .filter(comments::book_id.eq(book_id))
                .order((comments::created_at.asc(), comments::id.asc()))
                .load::<CommentModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(CommentModel::into_entity).collect())
    }

    async fn update_content(&self, id: i32, content: String) -> AppResult<Comment> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<CommentModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(comments::table.find(id))
                .set(comments::content.eq(content))
                .get_result::<CommentModel>(&mut conn)
                .optional()?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Comment with ID {} not found", id))
                })?;
            Ok(updated)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(comments::table.find(id)).execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!(
                    "Comment with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
