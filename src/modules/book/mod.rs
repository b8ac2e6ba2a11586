/// Book module
///
/// Owns the book records and the rating aggregate kept on each of them.
/// The aggregate is a running vote count plus running arithmetic mean,
/// updated incrementally per vote; individual ratings are never stored.
///
/// Architecture:
/// - Domain: Entities and repository trait
/// - Infrastructure: Diesel-based repository implementation
/// - Application: Service with the rating aggregation logic
/// - Routes: axum handlers
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy access
pub use application::BookService;
pub use domain::{Book, BookRepository, BookWithRelations, NewBook};
pub use infrastructure::BookRepositoryImpl;
