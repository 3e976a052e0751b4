use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{BookModifier, DependOnBookModifier, WishlistModifier};
use kernel::prelude::entity::UserId;
use kernel::KernelError;

use crate::service::{settle, GetWishlistService};
use crate::transfer::{BorrowWishlistDto, WishlistDto};

#[async_trait::async_trait]
pub trait BorrowWishlistService<Connection: Transaction + Send>:
    'static + Sync + Send + GetWishlistService<Connection> + DependOnBookModifier<Connection>
{
    /// Checks out the whole active wishlist in one transaction: a copy is
    /// reserved for every contained book and the wishlist transitions to
    /// `Borrowed` with an empty set, or nothing changes at all. An empty
    /// wishlist checks out trivially.
    async fn borrow_all(
        &self,
        dto: BorrowWishlistDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<WishlistDto, KernelError> = async {
            let wishlist = self.resolve_active(&mut con, &user_id).await?;
            // wishlist insertion order; the first infeasible book aborts the
            // whole call and settle() rolls every reservation back
            for book_id in wishlist.books() {
                self.book_modifier().reserve(&mut con, book_id).await?;
            }
            let borrowed = wishlist.into_borrowed()?;
            self.wishlist_modifier()
                .update_status(&mut con, borrowed.id(), borrowed.status())
                .await?;
            self.wishlist_modifier()
                .clear_books(&mut con, borrowed.id())
                .await?;
            Ok(WishlistDto::from(borrowed))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> BorrowWishlistService<Connection> for T where
    T: GetWishlistService<Connection> + DependOnBookModifier<Connection>
{
}
