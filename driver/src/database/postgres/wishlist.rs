use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::WishlistQuery;
use kernel::interface::update::WishlistModifier;
use kernel::prelude::entity::{
    BookId, CreatedAt, UserId, Wishlist, WishlistId, WishlistStatus,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresWishlistRepository;

#[async_trait::async_trait]
impl WishlistQuery<PostgresTransaction> for PostgresWishlistRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &WishlistId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        PgWishlistInternal::find_by_id(con, id).await
    }

    async fn find_active_by_user(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        PgWishlistInternal::find_active_by_user(con, user_id).await
    }
}

#[async_trait::async_trait]
impl WishlistModifier<PostgresTransaction> for PostgresWishlistRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        wishlist: &Wishlist,
    ) -> error_stack::Result<(), KernelError> {
        PgWishlistInternal::create(con, wishlist).await
    }

    async fn add_book(
        &self,
        con: &mut PostgresTransaction,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgWishlistInternal::add_book(con, id, book_id).await
    }

    async fn remove_book(
        &self,
        con: &mut PostgresTransaction,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        PgWishlistInternal::remove_book(con, id, book_id).await
    }

    async fn clear_books(
        &self,
        con: &mut PostgresTransaction,
        id: &WishlistId,
    ) -> error_stack::Result<(), KernelError> {
        PgWishlistInternal::clear_books(con, id).await
    }

    async fn update_status(
        &self,
        con: &mut PostgresTransaction,
        id: &WishlistId,
        status: &WishlistStatus,
    ) -> error_stack::Result<(), KernelError> {
        PgWishlistInternal::update_status(con, id, status).await
    }
}

#[derive(sqlx::FromRow)]
struct WishlistRow {
    id: Uuid,
    user_id: Uuid,
    status: String,
    created_at: OffsetDateTime,
}

#[derive(sqlx::FromRow)]
struct WishlistBookRow {
    book_id: Uuid,
}

pub(in crate::database) struct PgWishlistInternal;

impl PgWishlistInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &WishlistId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        let row = sqlx::query_as::<_, WishlistRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, status, created_at
            FROM wishlists
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        match row {
            Some(row) => Ok(Some(Self::load(con, row).await?)),
            None => Ok(None),
        }
    }

    async fn find_active_by_user(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        let row = sqlx::query_as::<_, WishlistRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, status, created_at
            FROM wishlists
            WHERE user_id = $1 AND status = 'CREATED'
            "#,
        )
        .bind(user_id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        match row {
            Some(row) => Ok(Some(Self::load(con, row).await?)),
            None => Ok(None),
        }
    }

    async fn load(
        con: &mut PgConnection,
        row: WishlistRow,
    ) -> error_stack::Result<Wishlist, KernelError> {
        let books = sqlx::query_as::<_, WishlistBookRow>(
            // language=postgresql
            r#"
            SELECT book_id
            FROM wishlist_books
            WHERE wishlist_id = $1
            ORDER BY position
            "#,
        )
        .bind(row.id)
        .fetch_all(con)
        .await
        .convert_error()?;
        let status = row.status.parse::<WishlistStatus>()?;
        Ok(Wishlist::new(
            WishlistId::new(row.id),
            UserId::new(row.user_id),
            books
                .into_iter()
                .map(|book| BookId::new(book.book_id))
                .collect(),
            status,
            CreatedAt::new(row.created_at),
        ))
    }

    async fn create(
        con: &mut PgConnection,
        wishlist: &Wishlist,
    ) -> error_stack::Result<(), KernelError> {
        // the partial unique index on (user_id) WHERE status = 'CREATED'
        // arbitrates concurrent first-time creation
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO wishlists (id, user_id, status, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) WHERE status = 'CREATED' DO NOTHING
            "#,
        )
        .bind(wishlist.id().as_ref())
        .bind(wishlist.user_id().as_ref())
        .bind(wishlist.status().as_str())
        .bind(wishlist.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn add_book(
        con: &mut PgConnection,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO wishlist_books (wishlist_id, book_id, position)
            SELECT $1, $2, COALESCE(MAX(position) + 1, 0)
            FROM wishlist_books
            WHERE wishlist_id = $1
            ON CONFLICT (wishlist_id, book_id) DO NOTHING
            "#,
        )
        .bind(id.as_ref())
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn remove_book(
        con: &mut PgConnection,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM wishlist_books
            WHERE wishlist_id = $1 AND book_id = $2
            "#,
        )
        .bind(id.as_ref())
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn clear_books(
        con: &mut PgConnection,
        id: &WishlistId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM wishlist_books
            WHERE wishlist_id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &WishlistId,
        status: &WishlistStatus,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE wishlists
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(status.as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::WishlistQuery;
    use kernel::interface::update::{BookModifier, WishlistModifier};
    use kernel::prelude::entity::{
        AuthorId, Book, BookCategory, BookCopies, BookId, BookTitle, CreatedAt, UserId, Wishlist,
        WishlistId, WishlistStatus,
    };
    use kernel::KernelError;
    use time::OffsetDateTime;

    use crate::database::postgres::{
        PostgresBookRepository, PostgresDatabase, PostgresWishlistRepository,
    };

    fn book(title: &str) -> Book {
        Book::new(
            BookId::new(uuid::Uuid::new_v4()),
            BookTitle::new(title.to_string()),
            BookCategory::new("test".to_string()),
            AuthorId::new(uuid::Uuid::new_v4()),
            BookCopies::new(1),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> Result<(), error_stack::Report<KernelError>> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let first = book(&format!("test-{}", rand::random::<u32>()));
        let second = book(&format!("test-{}", rand::random::<u32>()));
        PostgresBookRepository.create(&mut con, &first).await?;
        PostgresBookRepository.create(&mut con, &second).await?;

        let user_id = UserId::new(uuid::Uuid::new_v4());
        let wishlist = Wishlist::new(
            WishlistId::new(uuid::Uuid::new_v4()),
            user_id.clone(),
            Vec::new(),
            WishlistStatus::Created,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        PostgresWishlistRepository.create(&mut con, &wishlist).await?;

        // a second insert for the same user is skipped by the partial index
        let duplicate = Wishlist::new(
            WishlistId::new(uuid::Uuid::new_v4()),
            user_id.clone(),
            Vec::new(),
            WishlistStatus::Created,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        PostgresWishlistRepository
            .create(&mut con, &duplicate)
            .await?;
        let active = PostgresWishlistRepository
            .find_active_by_user(&mut con, &user_id)
            .await?
            .expect("active wishlist");
        assert_eq!(active.id(), wishlist.id());

        PostgresWishlistRepository
            .add_book(&mut con, wishlist.id(), first.id())
            .await?;
        PostgresWishlistRepository
            .add_book(&mut con, wishlist.id(), second.id())
            .await?;
        PostgresWishlistRepository
            .add_book(&mut con, wishlist.id(), first.id())
            .await?;

        let active = PostgresWishlistRepository
            .find_active_by_user(&mut con, &user_id)
            .await?
            .expect("active wishlist");
        assert_eq!(active.books(), &[first.id().clone(), second.id().clone()]);

        PostgresWishlistRepository
            .remove_book(&mut con, wishlist.id(), second.id())
            .await?;
        PostgresWishlistRepository
            .remove_book(&mut con, wishlist.id(), second.id())
            .await?;
        let active = PostgresWishlistRepository
            .find_active_by_user(&mut con, &user_id)
            .await?
            .expect("active wishlist");
        assert_eq!(active.books(), &[first.id().clone()]);

        PostgresWishlistRepository
            .update_status(&mut con, wishlist.id(), &WishlistStatus::Borrowed)
            .await?;
        PostgresWishlistRepository
            .clear_books(&mut con, wishlist.id())
            .await?;

        let active = PostgresWishlistRepository
            .find_active_by_user(&mut con, &user_id)
            .await?;
        assert!(active.is_none());

        let borrowed = PostgresWishlistRepository
            .find_by_id(&mut con, wishlist.id())
            .await?
            .expect("borrowed wishlist");
        assert_eq!(borrowed.status(), &WishlistStatus::Borrowed);
        assert!(borrowed.books().is_empty());

        con.roll_back().await?;
        Ok(())
    }
}
