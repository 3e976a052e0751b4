use crate::database::Transaction;
use crate::entity::{UserId, Wishlist, WishlistId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait WishlistQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &WishlistId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError>;

    /// The user's single `Created` wishlist, entries in insertion order.
    async fn find_active_by_user(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError>;
}

pub trait DependOnWishlistQuery<Connection: Transaction>: Sync + Send + 'static {
    type WishlistQuery: WishlistQuery<Connection>;
    fn wishlist_query(&self) -> &Self::WishlistQuery;
}
