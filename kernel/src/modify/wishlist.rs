use crate::database::Transaction;
use crate::entity::{BookId, Wishlist, WishlistId, WishlistStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait WishlistModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Inserts a fresh wishlist. When the user already has a `Created` one the
    /// insert is skipped, so concurrent first-time callers converge on a
    /// single active record.
    async fn create(
        &self,
        con: &mut Connection,
        wishlist: &Wishlist,
    ) -> error_stack::Result<(), KernelError>;

    /// Idempotent append; an already-present book leaves the set unchanged.
    async fn add_book(
        &self,
        con: &mut Connection,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;

    /// Idempotent removal; an absent book leaves the set unchanged.
    async fn remove_book(
        &self,
        con: &mut Connection,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError>;

    async fn clear_books(
        &self,
        con: &mut Connection,
        id: &WishlistId,
    ) -> error_stack::Result<(), KernelError>;

    async fn update_status(
        &self,
        con: &mut Connection,
        id: &WishlistId,
        status: &WishlistStatus,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnWishlistModifier<Connection: Transaction>: 'static + Sync + Send {
    type WishlistModifier: WishlistModifier<Connection>;
    fn wishlist_modifier(&self) -> &Self::WishlistModifier;
}
