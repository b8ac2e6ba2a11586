pub mod entities;
pub mod repository;

pub use entities::{Comment, COMMENT_CAP};
pub use repository::CommentRepository;
