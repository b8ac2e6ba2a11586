pub mod entities;
pub mod repository;

pub use entities::{Book, BookWithRelations, NewBook};
pub use repository::BookRepository;
