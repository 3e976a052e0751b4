use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnWishlistQuery, WishlistQuery};
use kernel::interface::update::{DependOnWishlistModifier, WishlistModifier};
use kernel::prelude::entity::{
    BookId, CreatedAt, UserId, Wishlist, WishlistId, WishlistStatus,
};
use kernel::{KernelError, RejectedBook};

use crate::service::settle;
use crate::transfer::{
    AddWishlistBookDto, BookDto, CreateWishlistDto, GetWishlistDto, ListWishlistBooksDto,
    RemoveWishlistBookDto, WishlistDto,
};

fn fresh_wishlist(user_id: &UserId) -> Wishlist {
    Wishlist::new(
        WishlistId::new(Uuid::new_v4()),
        user_id.clone(),
        Vec::new(),
        WishlistStatus::Created,
        CreatedAt::new(OffsetDateTime::now_utc()),
    )
}

#[async_trait::async_trait]
pub trait GetWishlistService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnWishlistQuery<Connection>
    + DependOnWishlistModifier<Connection>
{
    async fn get_or_create_active(
        &self,
        dto: GetWishlistDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<WishlistDto, KernelError> = async {
            let wishlist = self.resolve_active(&mut con, &user_id).await?;
            Ok(WishlistDto::from(wishlist))
        }
        .await;
        settle(con, result).await
    }

    /// Find-or-create inside the caller's transaction. The insert skips on
    /// conflict and the re-read picks whichever record won, so at most one
    /// `Created` wishlist per user is ever observable.
    async fn resolve_active(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Wishlist, KernelError> {
        if let Some(wishlist) = self
            .wishlist_query()
            .find_active_by_user(con, user_id)
            .await?
        {
            return Ok(wishlist);
        }
        let fresh = fresh_wishlist(user_id);
        self.wishlist_modifier().create(con, &fresh).await?;
        self.wishlist_query()
            .find_active_by_user(con, user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Internal)
                    .attach_printable("active wishlist missing right after insert")
            })
    }
}

impl<Connection: Transaction + Send, T> GetWishlistService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnWishlistQuery<Connection>
        + DependOnWishlistModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateWishlistService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnWishlistModifier<Connection>
{
    /// Explicit factory: inserts a fresh `Created` wishlist without looking
    /// for an existing one. Callers that need "the" active wishlist use
    /// [`GetWishlistService::get_or_create_active`] instead.
    async fn create_wishlist(
        &self,
        dto: CreateWishlistDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<WishlistDto, KernelError> = async {
            let fresh = fresh_wishlist(&user_id);
            self.wishlist_modifier().create(&mut con, &fresh).await?;
            Ok(WishlistDto::from(fresh))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> CreateWishlistService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnWishlistModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait AddWishlistBookService<Connection: Transaction + Send>:
    'static + Sync + Send + GetWishlistService<Connection> + DependOnBookQuery<Connection>
{
    async fn add_book(
        &self,
        dto: AddWishlistBookDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let book_id = BookId::new(dto.book_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<WishlistDto, KernelError> = async {
            let book = self
                .book_query()
                .find_by_id(&mut con, &book_id)
                .await?
                .ok_or_else(|| Report::new(KernelError::NotFound))?;
            // feasibility only; nothing is reserved until checkout
            if !book.has_available_copy() {
                return Err(Report::new(KernelError::InsufficientCopies)
                    .attach_printable(RejectedBook::from(&book)));
            }
            let mut wishlist = self.resolve_active(&mut con, &user_id).await?;
            if wishlist.add_book(book_id.clone())? {
                self.wishlist_modifier()
                    .add_book(&mut con, wishlist.id(), &book_id)
                    .await?;
            }
            Ok(WishlistDto::from(wishlist))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> AddWishlistBookService<Connection> for T where
    T: GetWishlistService<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait RemoveWishlistBookService<Connection: Transaction + Send>:
    'static + Sync + Send + GetWishlistService<Connection>
{
    async fn remove_book(
        &self,
        dto: RemoveWishlistBookDto,
    ) -> error_stack::Result<WishlistDto, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let book_id = BookId::new(dto.book_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<WishlistDto, KernelError> = async {
            let mut wishlist = self.resolve_active(&mut con, &user_id).await?;
            if wishlist.remove_book(&book_id)? {
                self.wishlist_modifier()
                    .remove_book(&mut con, wishlist.id(), &book_id)
                    .await?;
            }
            Ok(WishlistDto::from(wishlist))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> RemoveWishlistBookService<Connection> for T where
    T: GetWishlistService<Connection>
{
}

#[async_trait::async_trait]
pub trait ListWishlistBooksService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnWishlistQuery<Connection>
    + DependOnBookQuery<Connection>
{
    /// Contents of the active wishlist. A user without one gets an empty
    /// list; this read does not create anything.
    async fn list_books(
        &self,
        dto: ListWishlistBooksDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let user_id = UserId::new(dto.user_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<Vec<BookDto>, KernelError> = async {
            let wishlist = match self
                .wishlist_query()
                .find_active_by_user(&mut con, &user_id)
                .await?
            {
                Some(wishlist) => wishlist,
                None => return Ok(Vec::new()),
            };
            let mut books = Vec::with_capacity(wishlist.books().len());
            for book_id in wishlist.books() {
                let book = self
                    .book_query()
                    .find_by_id(&mut con, book_id)
                    .await?
                    .ok_or_else(|| Report::new(KernelError::NotFound))?;
                books.push(BookDto::from(book));
            }
            Ok(books)
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> ListWishlistBooksService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnWishlistQuery<Connection>
        + DependOnBookQuery<Connection>
{
}
