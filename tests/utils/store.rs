/// In-memory fake of the book/comment store
///
/// Implements the repository traits over plain vectors so service behavior
/// (retention cap, rating aggregation) can be exercised without PostgreSQL.
/// Inserted comments get strictly increasing timestamps so ordering
/// assertions are deterministic.
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use hondana::modules::book::{Book, BookRepository, BookWithRelations, NewBook};
use hondana::modules::comment::{Comment, CommentRepository};
use hondana::shared::errors::{AppError, AppResult};

pub struct InMemoryStore {
    base: DateTime<Utc>,
    books: Mutex<Vec<Book>>,
    comments: Mutex<Vec<Comment>>,
    next_book_id: AtomicI32,
    next_comment_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            base: Utc::now(),
            books: Mutex::new(Vec::new()),
            comments: Mutex::new(Vec::new()),
            next_book_id: AtomicI32::new(1),
            next_comment_id: AtomicI32::new(1),
        }
    }

    /// Seed a book directly, bypassing the service layer
    pub fn seed_book(&self, title: &str) -> Book {
        let id = self.next_book_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let book = Book {
            id,
            title: title.to_string(),
            author: "Test Author".to_string(),
            image: None,
            description: None,
            pages: None,
            year: None,
            category_id: None,
            total_votes: 0,
            average_rating: 0.0,
            age_range: None,
            created_at: now,
            updated_at: now,
        };
        self.books.lock().unwrap().push(book.clone());
        book
    }

    pub fn comment_count(&self, book_id: i32) -> usize {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.book_id == book_id)
            .count()
    }

    pub fn book_snapshot(&self, book_id: i32) -> Option<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
    }

    fn sorted_comments(&self, book_id: i32) -> Vec<Comment> {
        let mut list: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        list
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.book_snapshot(id))
    }

    async fn find_with_relations(&self, id: i32) -> AppResult<Option<BookWithRelations>> {
        Ok(self.book_snapshot(id).map(|book| BookWithRelations {
            comments: self.sorted_comments(book.id),
            category: None,
            book,
        }))
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        let id = self.next_book_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let book = Book {
            id,
            title: new_book.title,
            author: new_book.author,
            image: new_book.image,
            description: new_book.description,
            pages: new_book.pages,
            year: new_book.year,
            category_id: new_book.category_id,
            total_votes: 0,
            average_rating: 0.0,
            age_range: new_book.age_range,
            created_at: now,
            updated_at: now,
        };
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update_rating(
        &self,
        id: i32,
        total_votes: i32,
        average_rating: f64,
    ) -> AppResult<()> {
        let mut books = self.books.lock().unwrap();
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;
        book.total_votes = total_votes;
        book.average_rating = average_rating;
        book.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, book_id: i32, content: String) -> AppResult<Comment> {
        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        let comment = Comment {
            id,
            book_id,
            content,
            // one second apart per insert, mimicking the store's NOW()
            created_at: self.base + Duration::seconds(id as i64),
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<Comment>> {
        Ok(self.sorted_comments(book_id))
    }

    async fn update_content(&self, id: i32, content: String) -> AppResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Comment with ID {} not found", id)))?;
        comment.content = content;
        Ok(comment.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(AppError::NotFound(format!(
                "Comment with ID {} not found",
                id
            )));
        }
        Ok(())
    }
}
