use crate::entity::{AuthorId, Book, BookCategory, BookCopies, BookId, BookTitle, CreatedAt, UserId};

/// One immutable line of the catalog audit trail: the book's fields as they
/// stood right after a librarian edit, plus who edited and when.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookHistoryEntry {
    book_id: BookId,
    title: BookTitle,
    category: BookCategory,
    author_id: AuthorId,
    copies: BookCopies,
    editor_id: UserId,
    recorded_at: CreatedAt<BookHistoryEntry>,
}

pub struct DestructBookHistoryEntry {
    pub book_id: BookId,
    pub title: BookTitle,
    pub category: BookCategory,
    pub author_id: AuthorId,
    pub copies: BookCopies,
    pub editor_id: UserId,
    pub recorded_at: CreatedAt<BookHistoryEntry>,
}

impl BookHistoryEntry {
    pub fn new(
        book_id: BookId,
        title: BookTitle,
        category: BookCategory,
        author_id: AuthorId,
        copies: BookCopies,
        editor_id: UserId,
        recorded_at: CreatedAt<BookHistoryEntry>,
    ) -> Self {
        Self {
            book_id,
            title,
            category,
            author_id,
            copies,
            editor_id,
            recorded_at,
        }
    }

    pub fn snapshot(book: &Book, editor_id: UserId) -> Self {
        Self {
            book_id: book.id().clone(),
            title: book.title().clone(),
            category: book.category().clone(),
            author_id: book.author_id().clone(),
            copies: book.copies().clone(),
            editor_id,
            recorded_at: CreatedAt::now(),
        }
    }

    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn category(&self) -> &BookCategory {
        &self.category
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub fn copies(&self) -> &BookCopies {
        &self.copies
    }

    pub fn editor_id(&self) -> &UserId {
        &self.editor_id
    }

    pub fn recorded_at(&self) -> &CreatedAt<BookHistoryEntry> {
        &self.recorded_at
    }

    pub fn into_destruct(self) -> DestructBookHistoryEntry {
        DestructBookHistoryEntry {
            book_id: self.book_id,
            title: self.title,
            category: self.category,
            author_id: self.author_id,
            copies: self.copies,
            editor_id: self.editor_id,
            recorded_at: self.recorded_at,
        }
    }
}
