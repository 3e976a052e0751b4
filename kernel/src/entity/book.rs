mod category;
mod copies;
mod id;
mod title;

pub use self::{category::*, copies::*, id::*, title::*};

use error_stack::Report;

use crate::entity::AuthorId;
use crate::{KernelError, RejectedBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    category: BookCategory,
    author_id: AuthorId,
    copies: BookCopies,
}

pub struct DestructBook {
    pub id: BookId,
    pub title: BookTitle,
    pub category: BookCategory,
    pub author_id: AuthorId,
    pub copies: BookCopies,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        category: BookCategory,
        author_id: AuthorId,
        copies: BookCopies,
    ) -> Self {
        Self {
            id,
            title,
            category,
            author_id,
            copies,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
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

    pub fn has_available_copy(&self) -> bool {
        self.copies.is_positive()
    }

    /// Hands out one copy. Fails when the counter is already at zero, so the
    /// count can never go negative.
    pub fn reserve(self) -> error_stack::Result<Self, KernelError> {
        if !self.has_available_copy() {
            let rejected = RejectedBook::from(&self);
            return Err(Report::new(KernelError::InsufficientCopies).attach_printable(rejected));
        }
        Ok(Self {
            copies: self.copies.decremented(),
            ..self
        })
    }

    /// Takes one copy back, the inverse of [`Book::reserve`].
    pub fn release(self) -> Self {
        Self {
            copies: self.copies.incremented(),
            ..self
        }
    }

    pub fn updated(
        self,
        title: Option<BookTitle>,
        category: Option<BookCategory>,
        author_id: Option<AuthorId>,
        copies: Option<BookCopies>,
    ) -> Self {
        Self {
            id: self.id,
            title: title.unwrap_or(self.title),
            category: category.unwrap_or(self.category),
            author_id: author_id.unwrap_or(self.author_id),
            copies: copies.unwrap_or(self.copies),
        }
    }

    pub fn into_destruct(self) -> DestructBook {
        DestructBook {
            id: self.id,
            title: self.title,
            category: self.category,
            author_id: self.author_id,
            copies: self.copies,
        }
    }
}
