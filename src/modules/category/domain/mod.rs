pub mod entities;
pub mod repository;

pub use entities::Category;
pub use repository::CategoryRepository;
