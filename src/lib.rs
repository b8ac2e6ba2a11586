pub mod http;
pub mod modules;
mod schema;
pub mod shared;
