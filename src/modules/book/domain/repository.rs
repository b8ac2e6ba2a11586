/// Repository trait for book persistence
///
/// The store boundary for book records. Implemented with Diesel against
/// PostgreSQL; substituted with in-memory fakes in tests.
use crate::modules::book::domain::entities::{Book, BookWithRelations, NewBook};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by id, without its relations
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Find a book joined with its category and its comments (oldest first)
    async fn find_with_relations(&self, id: i32) -> AppResult<Option<BookWithRelations>>;

    /// Get all books
    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// Insert a new book; the store assigns the id
    async fn create(&self, new_book: NewBook) -> AppResult<Book>;

    /// Write both rating aggregates in a single UPDATE so they are never
    /// observed inconsistent with each other
    async fn update_rating(&self, id: i32, total_votes: i32, average_rating: f64)
        -> AppResult<()>;
}
