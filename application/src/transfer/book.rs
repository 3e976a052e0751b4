use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub author_id: Uuid,
    pub copies: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            category,
            author_id,
            copies,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            author_id: author_id.into(),
            copies: copies.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct CreateBookDto {
    pub title: String,
    pub category: String,
    pub author_id: Uuid,
    pub copies: i32,
    pub editor_id: Uuid,
}

pub struct UpdateBookDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<Uuid>,
    pub copies: Option<i32>,
    pub editor_id: Uuid,
}
