use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::category::Category;
use crate::modules::comment::Comment;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
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

/// Full book projection returned by every mutating route: the book joined
/// with its category (if any) and its comments, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookWithRelations {
    #[serde(flatten)]
    pub book: Book,
    pub category: Option<Category>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub pages: Option<i32>,
    pub year: Option<i32>,
    pub category_id: Option<i32>,
    pub age_range: Option<String>,
}

impl Book {
    /// Fold one new vote into the running aggregate. No individual ratings
    /// are retained; the mean is carried forward with the weighted-mean
    /// update `a' = (a * n + rating) / (n + 1)`, which reduces to
    /// `a' = rating` for the first vote.
    pub fn apply_rating(&mut self, rating: i32) {
        let n = self.total_votes as f64;
        self.average_rating = (self.average_rating * n + rating as f64) / (n + 1.0);
        self.total_votes += 1;
    }
}
