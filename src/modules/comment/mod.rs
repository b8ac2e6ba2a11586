/// Comment module
///
/// Owns the comments attached to books and the retention rule on them:
/// at most COMMENT_CAP comments per book, oldest evicted once an insertion
/// pushes the count past the cap.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy access
pub use application::CommentService;
pub use domain::{Comment, CommentRepository, COMMENT_CAP};
pub use infrastructure::CommentRepositoryImpl;
