use super::super::domain::{
    entities::{Book, BookWithRelations, NewBook},
    repository::BookRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }

    pub async fn get_books(&self) -> AppResult<Vec<Book>> {
        let books = self.book_repo.get_all().await?;

        Ok(books)
    }

    pub async fn get_book(&self, id: i32) -> AppResult<BookWithRelations> {
        self.book_repo
            .find_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))
    }

    pub async fn create_book(&self, new_book: NewBook) -> AppResult<Book> {
        Validator::validate_book_title(&new_book.title)?;

        let saved = self.book_repo.create(new_book).await?;

        log_info!("Created book {} ('{}')", saved.id, saved.title);
        Ok(saved)
    }

    /// Record one vote against a book and carry its running mean forward.
    ///
    /// The read and the write are two separate store operations with no
    /// transaction around them; two raters hitting the same book can both
    /// read the same aggregates and the second write wins, under-counting
    /// one vote. Low contention is assumed rather than enforced.
    pub async fn rate_book(&self, id: i32, rating: i32) -> AppResult<BookWithRelations> {
        // Rejected before any store access
        Validator::validate_rating(rating)?;

        let mut book = self
            .book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        book.apply_rating(rating);

        self.book_repo
            .update_rating(id, book.total_votes, book.average_rating)
            .await?;

        log_debug!(
            "Book {} rated {}: {} votes, average {:.2}",
            id,
            rating,
            book.total_votes,
            book.average_rating
        );

        self.book_repo
            .find_with_relations(id)
            .await?
            .ok_or_else(|| AppError::InternalError("Failed to reload book after rating".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        BookRepo {}

        #[async_trait::async_trait]
        impl BookRepository for BookRepo {
            async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;
            async fn find_with_relations(&self, id: i32) -> AppResult<Option<BookWithRelations>>;
            async fn get_all(&self) -> AppResult<Vec<Book>>;
            async fn create(&self, new_book: NewBook) -> AppResult<Book>;
            async fn update_rating(
                &self,
                id: i32,
                total_votes: i32,
                average_rating: f64,
            ) -> AppResult<()>;
        }
    }

    fn book_with_votes(id: i32, total_votes: i32, average_rating: f64) -> Book {
        let now = Utc::now();
        Book {
            id,
            title: "A Wizard of Earthsea".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            image: None,
            description: None,
            pages: Some(183),
            year: Some(1968),
            category_id: None,
            total_votes,
            average_rating,
            age_range: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn with_relations(book: Book) -> BookWithRelations {
        BookWithRelations {
            book,
            category: None,
            comments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn out_of_range_rating_never_touches_the_store() {
        let mut repo = MockBookRepo::new();
        repo.expect_find_by_id().times(0);
        repo.expect_update_rating().times(0);

        let service = BookService::new(Arc::new(repo));

        for rating in [0, 6, -1] {
            let err = service.rate_book(1, rating).await.unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }
    }

    #[tokio::test]
    async fn rating_a_missing_book_is_not_found() {
        let mut repo = MockBookRepo::new();
        repo.expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));
        repo.expect_update_rating().times(0);

        let service = BookService::new(Arc::new(repo));

        let err = service.rate_book(42, 3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn first_vote_writes_count_one_and_the_rating_itself() {
        let mut repo = MockBookRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(book_with_votes(id, 0, 0.0))));
        repo.expect_update_rating()
            .with(eq(1), eq(1), eq(5.0))
            .times(1)
            .returning(|_, _, _| Ok(()));
        repo.expect_find_with_relations()
            .with(eq(1))
            .returning(|id| Ok(Some(with_relations(book_with_votes(id, 1, 5.0)))));

        let service = BookService::new(Arc::new(repo));

        let result = service.rate_book(1, 5).await.unwrap();
        assert_eq!(result.book.total_votes, 1);
        assert_eq!(result.book.average_rating, 5.0);
    }

    #[tokio::test]
    async fn later_votes_use_the_weighted_mean() {
        let mut repo = MockBookRepo::new();
        // Book already has three votes averaging 4.0; one more 2 lands at 3.5.
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(book_with_votes(id, 3, 4.0))));
        repo.expect_update_rating()
            .with(eq(7), eq(4), eq(3.5))
            .times(1)
            .returning(|_, _, _| Ok(()));
        repo.expect_find_with_relations()
            .with(eq(7))
            .returning(|id| Ok(Some(with_relations(book_with_votes(id, 4, 3.5)))));

        let service = BookService::new(Arc::new(repo));

        let result = service.rate_book(7, 2).await.unwrap();
        assert_eq!(result.book.total_votes, 4);
        assert_eq!(result.book.average_rating, 3.5);
    }

    #[tokio::test]
    async fn empty_book_title_is_rejected() {
        let mut repo = MockBookRepo::new();
        repo.expect_create().times(0);

        let service = BookService::new(Arc::new(repo));

        let err = service
            .create_book(NewBook {
                title: String::new(),
                author: "Anon".to_string(),
                image: None,
                description: None,
                pages: None,
                year: None,
                category_id: None,
                age_range: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
