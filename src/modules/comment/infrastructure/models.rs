use crate::modules::comment::domain::entities::Comment;
use crate::schema::comments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = comments)]
pub struct CommentModel {
    pub id: i32,
    pub book_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = comments)]
pub struct NewCommentModel {
    pub book_id: i32,
    pub content: String,
}

impl CommentModel {
    pub fn into_entity(self) -> Comment {
        Comment {
            id: self.id,
            book_id: self.book_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
