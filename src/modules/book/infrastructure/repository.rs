use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::book::domain::entities::{Book, BookWithRelations, NewBook};
use crate::modules::book::domain::repository::BookRepository;
use crate::modules::book::infrastructure::models::{BookModel, NewBookModel, RatingChangeset};
use crate::modules::category::infrastructure::models::CategoryModel;
use crate::modules::comment::infrastructure::models::CommentModel;
use crate::schema::{books, categories, comments};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct BookRepositoryImpl {
    db: Arc<Database>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<BookModel>> {
            let mut conn = db.get_connection()?;
            let m = books::table
                .find(id)
                .first::<BookModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(BookModel::into_entity))
    }

    async fn find_with_relations(&self, id: i32) -> AppResult<Option<BookWithRelations>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<BookWithRelations>> {
            let mut conn = db.get_connection()?;

            let model = match books::table
                .find(id)
                .first::<BookModel>(&mut conn)
                .optional()?
            {
                Some(m) => m,
                None => return Ok(None),
            };

            let category = match model.category_id {
                Some(category_id) => categories::table
                    .find(category_id)
                    .first::<CategoryModel>(&mut conn)
                    .optional()?
                    .map(CategoryModel::into_entity),
                None => None,
            };

            // Oldest first; id breaks timestamp ties in insertion order.
            let comment_models = comments::table
                .filter(comments::book_id.eq(id))
                .order((comments::created_at.asc(), comments::id.asc()))
                .load::<CommentModel>(&mut conn)?;

            Ok(Some(BookWithRelations {
                book: model.into_entity(),
                category,
                comments: comment_models
                    .into_iter()
                    .map(CommentModel::into_entity)
                    .collect(),
            }))
        })
        .await?
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<BookModel>> {
            let mut conn = db.get_connection()?;
            let rows = books::table
                .order(books::created_at.desc())
                .load::<BookModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(BookModel::into_entity).collect())
    }

    async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        let db = Arc::clone(&self.db);
        let new_row = NewBookModel::from(new_book);

        let model = task::spawn_blocking(move || -> AppResult<BookModel> {
            let mut conn = db.get_connection()?;
            let saved = diesel::insert_into(books::table)
                .values(&new_row)
                .get_result::<BookModel>(&mut conn)?;
            Ok(saved)
        })
        .await??;

        Ok(model.into_entity())
    }

    async fn update_rating(
        &self,
        id: i32,
        total_votes: i32,
        average_rating: f64,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let changes = RatingChangeset {
                total_votes,
                average_rating,
                updated_at: chrono::Utc::now(),
            };

            let n = diesel::update(books::table.find(id))
                .set(&changes)
                .execute(&mut conn)?;

            if n == 0 {
                return Err(AppError::NotFound(format!("Book with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }
}
