use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructWishlist, Wishlist};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: String,
    pub books: Vec<Uuid>,
    pub created_at: OffsetDateTime,
}

impl From<Wishlist> for WishlistDto {
    fn from(value: Wishlist) -> Self {
        let DestructWishlist {
            id,
            user_id,
            books,
            status,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            status: status.as_str().to_string(),
            books: books.into_iter().map(Uuid::from).collect(),
            created_at: created_at.into(),
        }
    }
}

pub struct GetWishlistDto {
    pub user_id: Uuid,
}

pub struct CreateWishlistDto {
    pub user_id: Uuid,
}

pub struct ListWishlistBooksDto {
    pub user_id: Uuid,
}

pub struct AddWishlistBookDto {
    pub user_id: Uuid,
    pub book_id: Uuid,
}

pub struct RemoveWishlistBookDto {
    pub user_id: Uuid,
    pub book_id: Uuid,
}

pub struct BorrowWishlistDto {
    pub user_id: Uuid,
}
