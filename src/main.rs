use std::env;
use std::sync::Arc;

use hondana::http::{make_router, AppState};
use hondana::log_info;
use hondana::modules::{
    book::{BookRepository, BookRepositoryImpl, BookService},
    category::{CategoryRepository, CategoryRepositoryImpl, CategoryService},
    comment::{CommentRepository, CommentRepositoryImpl, CommentService},
};
use hondana::shared::utils::logger::init_logger;
use hondana::shared::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let database = Arc::new(Database::new()?);

    // Repositories behind trait objects so services stay store-agnostic
    let book_repo: Arc<dyn BookRepository> =
        Arc::new(BookRepositoryImpl::new(Arc::clone(&database)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(CategoryRepositoryImpl::new(Arc::clone(&database)));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(CommentRepositoryImpl::new(Arc::clone(&database)));

    let book_service = Arc::new(BookService::new(Arc::clone(&book_repo)));
    let category_service = Arc::new(CategoryService::new(category_repo));
    let comment_service = Arc::new(CommentService::new(comment_repo, Arc::clone(&book_repo)));

    let state = AppState {
        database,
        book_service,
        category_service,
        comment_service,
    };

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log_info!("hondana listening on {}", addr);

    axum::serve(listener, make_router(state)).await?;

    Ok(())
}
