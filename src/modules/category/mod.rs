pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::CategoryService;
pub use domain::{Category, CategoryRepository};
pub use infrastructure::CategoryRepositoryImpl;
