use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{BookHistoryEntry, DestructBookHistoryEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookHistoryDto {
    pub book_id: Uuid,
    pub title: String,
    pub category: String,
    pub author_id: Uuid,
    pub copies: i32,
    pub editor_id: Uuid,
    pub recorded_at: OffsetDateTime,
}

impl From<BookHistoryEntry> for BookHistoryDto {
    fn from(value: BookHistoryEntry) -> Self {
        let DestructBookHistoryEntry {
            book_id,
            title,
            category,
            author_id,
            copies,
            editor_id,
            recorded_at,
        } = value.into_destruct();
        Self {
            book_id: book_id.into(),
            title: title.into(),
            category: category.into(),
            author_id: author_id.into(),
            copies: copies.into(),
            editor_id: editor_id.into(),
            recorded_at: recorded_at.into(),
        }
    }
}

pub struct GetBookHistoryDto {
    pub book_id: Uuid,
}
