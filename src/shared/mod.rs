// Shared kernel: error taxonomy, database access, logging and validation
// used by every module.

pub mod database;
pub mod errors;
pub mod utils;

// Re-exports for convenience
pub use database::{Database, DbConnection, DbPool};
