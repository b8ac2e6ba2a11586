use crate::modules::book::domain::entities::{Book, NewBook};
use crate::schema::books;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct BookModel {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub pages: Option<i32>,
    pub year: Option<i32>,
    pub category_id: Option<i32>,
    pub total_votes: i32,
    pub average_rating: f64,
    pub age_range: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = books)]
pub struct NewBookModel {
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub pages: Option<i32>,
    pub year: Option<i32>,
    pub category_id: Option<i32>,
    pub age_range: Option<String>,
}

/// Both aggregates always travel together; a partial write could leave the
/// mean and the count describing different vote sets.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = books)]
pub struct RatingChangeset {
    pub total_votes: i32,
    pub average_rating: f64,
    pub updated_at: DateTime<Utc>,
}

impl BookModel {
    pub fn into_entity(self) -> Book {
        Book {
            id: self.id,
            title: self.title,
            author: self.author,
            image: self.image,
            description: self.description,
            pages: self.pages,
            year: self.year,
            category_id: self.category_id,
            total_votes: self.total_votes,
            average_rating: self.average_rating,
            age_range: self.age_range,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<NewBook> for NewBookModel {
    fn from(new_book: NewBook) -> Self {
        Self {
            title: new_book.title,
            author: new_book.author,
            image: new_book.image,
            description: new_book.description,
            pages: new_book.pages,
            year: new_book.year,
            category_id: new_book.category_id,
            age_range: new_book.age_range,
        }
    }
}
