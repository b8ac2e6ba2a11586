use super::super::domain::{
    entities::{Comment, COMMENT_CAP},
    repository::CommentRepository,
};
use crate::modules::book::domain::{entities::BookWithRelations, repository::BookRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct CommentService {
    comment_repo: Arc<dyn CommentRepository>,
    book_repo: Arc<dyn BookRepository>,
}

impl CommentService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        book_repo: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            comment_repo,
            book_repo,
        }
    }

    /// Attach a comment to a book and enforce the retention cap.
    ///
    /// Content is accepted as-is, empty strings included. The cap is a soft
    /// bound: concurrent posts to the same book can leave it transiently
    /// above the cap, and the next insertion trims one row back. A failure
    /// after the insert leaves the comment in place (no rollback); callers
    /// must treat errors as unknown completion state.
    pub async fn add_comment(&self, book_id: i32, content: String) -> AppResult<BookWithRelations> {
        // Fail fast before any write
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))?;

        self.comment_repo.insert(book_id, content).await?;

        let comments = self.comment_repo.list_by_book(book_id).await?;
        if comments.len() > COMMENT_CAP {
            // Ordering comes from the repository (oldest first); evict
            // exactly the front row, never more.
            let oldest = &comments[0];
            self.comment_repo.delete(oldest.id).await?;
            log_debug!(
                "Evicted comment {} from book {} to hold the cap of {}",
                oldest.id,
                book_id,
                COMMENT_CAP
            );
        }

        log_info!("Added comment to book {}", book_id);

        self.book_repo
            .find_with_relations(book_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Failed to reload book after comment".into()))
    }

    pub async fn update_comment(&self, id: i32, content: String) -> AppResult<Comment> {
        let updated = self.comment_repo.update_content(id, content).await?;

        Ok(updated)
    }

    pub async fn delete_comment(&self, id: i32) -> AppResult<()> {
        self.comment_repo.delete(id).await?;

        Ok(())
    }
}
