/// Repository trait for comment persistence
///
/// The store assigns ids and creation timestamps on insert. Listing is
/// always oldest first so the retention logic can evict from the front.
use crate::modules::comment::domain::entities::Comment;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment linked to a book; content is stored as-is
    async fn insert(&self, book_id: i32, content: String) -> AppResult<Comment>;

    /// All comments of a book, ordered by created_at ascending, ties by id
    async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<Comment>>;

    /// Replace a comment's content
    async fn update_content(&self, id: i32, content: String) -> AppResult<Comment>;

    /// Delete a comment by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}
