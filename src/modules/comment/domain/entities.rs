use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comments per book are capped; inserting past this many evicts the oldest.
pub const COMMENT_CAP: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub book_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
