mod id;
mod status;

pub use self::{id::*, status::*};

use error_stack::Report;

use crate::entity::{BookId, CreatedAt, UserId};
use crate::KernelError;

/// A patron's cart of candidate books. `Borrowed` is terminal: the book set
/// is emptied on transition and no further mutation is accepted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Wishlist {
    id: WishlistId,
    user_id: UserId,
    books: Vec<BookId>,
    status: WishlistStatus,
    created_at: CreatedAt<Wishlist>,
}

pub struct DestructWishlist {
    pub id: WishlistId,
    pub user_id: UserId,
    pub books: Vec<BookId>,
    pub status: WishlistStatus,
    pub created_at: CreatedAt<Wishlist>,
}

impl Wishlist {
    pub fn new(
        id: WishlistId,
        user_id: UserId,
        books: Vec<BookId>,
        status: WishlistStatus,
        created_at: CreatedAt<Wishlist>,
    ) -> Self {
        Self {
            id,
            user_id,
            books,
            status,
            created_at,
        }
    }

    pub fn id(&self) -> &WishlistId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn books(&self) -> &[BookId] {
        &self.books
    }

    pub fn status(&self) -> &WishlistStatus {
        &self.status
    }

    pub fn created_at(&self) -> &CreatedAt<Wishlist> {
        &self.created_at
    }

    pub fn contains(&self, book_id: &BookId) -> bool {
        self.books.contains(book_id)
    }

    fn ensure_active(&self) -> error_stack::Result<(), KernelError> {
        if self.status.is_terminal() {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable("a borrowed wishlist is immutable history"));
        }
        Ok(())
    }

    /// Appends the reference, keeping insertion order. Returns `false` when
    /// the book was already present (a no-op, not an error).
    pub fn add_book(&mut self, book_id: BookId) -> error_stack::Result<bool, KernelError> {
        self.ensure_active()?;
        if self.contains(&book_id) {
            return Ok(false);
        }
        self.books.push(book_id);
        Ok(true)
    }

    /// Drops the reference. Returns `false` when it was absent.
    pub fn remove_book(&mut self, book_id: &BookId) -> error_stack::Result<bool, KernelError> {
        self.ensure_active()?;
        let before = self.books.len();
        self.books.retain(|id| id != book_id);
        Ok(self.books.len() != before)
    }

    /// The terminal transition: empties the book set and moves to `Borrowed`.
    pub fn into_borrowed(self) -> error_stack::Result<Self, KernelError> {
        self.ensure_active()?;
        Ok(Self {
            books: Vec::new(),
            status: WishlistStatus::Borrowed,
            ..self
        })
    }

    pub fn into_destruct(self) -> DestructWishlist {
        DestructWishlist {
            id: self.id,
            user_id: self.user_id,
            books: self.books,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
