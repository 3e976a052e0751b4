use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::BookHistoryQuery;
use kernel::interface::update::BookHistoryModifier;
use kernel::prelude::entity::{
    AuthorId, BookCategory, BookCopies, BookHistoryEntry, BookId, BookTitle, CreatedAt, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookHistoryRepository;

#[async_trait::async_trait]
impl BookHistoryQuery<PostgresTransaction> for PostgresBookHistoryRepository {
    async fn find_by_book_id(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookHistoryEntry>, KernelError> {
        PgBookHistoryInternal::find_by_book_id(con, book_id).await
    }
}

#[async_trait::async_trait]
impl BookHistoryModifier<PostgresTransaction> for PostgresBookHistoryRepository {
    async fn record(
        &self,
        con: &mut PostgresTransaction,
        entry: &BookHistoryEntry,
    ) -> error_stack::Result<(), KernelError> {
        PgBookHistoryInternal::record(con, entry).await
    }
}

#[derive(sqlx::FromRow)]
struct BookHistoryRow {
    book_id: Uuid,
    title: String,
    category: String,
    author_id: Uuid,
    copies: i32,
    editor_id: Uuid,
    recorded_at: OffsetDateTime,
}

impl From<BookHistoryRow> for BookHistoryEntry {
    fn from(value: BookHistoryRow) -> Self {
        BookHistoryEntry::new(
            BookId::new(value.book_id),
            BookTitle::new(value.title),
            BookCategory::new(value.category),
            AuthorId::new(value.author_id),
            BookCopies::new(value.copies),
            UserId::new(value.editor_id),
            CreatedAt::new(value.recorded_at),
        )
    }
}

pub(in crate::database) struct PgBookHistoryInternal;

impl PgBookHistoryInternal {
    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookHistoryEntry>, KernelError> {
        let rows = sqlx::query_as::<_, BookHistoryRow>(
            // language=postgresql
            r#"
            SELECT book_id, title, category, author_id, copies, editor_id, recorded_at
            FROM book_history
            WHERE book_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(BookHistoryEntry::from).collect())
    }

    async fn record(
        con: &mut PgConnection,
        entry: &BookHistoryEntry,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO book_history (book_id, title, category, author_id, copies, editor_id, recorded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.book_id().as_ref())
        .bind(entry.title().as_ref())
        .bind(entry.category().as_ref())
        .bind(entry.author_id().as_ref())
        .bind(entry.copies().as_ref())
        .bind(entry.editor_id().as_ref())
        .bind(entry.recorded_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookHistoryQuery;
    use kernel::interface::update::BookHistoryModifier;
    use kernel::prelude::entity::{
        AuthorId, Book, BookCategory, BookCopies, BookHistoryEntry, BookId, BookTitle, UserId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{PostgresBookHistoryRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> Result<(), error_stack::Report<KernelError>> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let book = Book::new(
            BookId::new(uuid::Uuid::new_v4()),
            BookTitle::new(format!("test-{}", rand::random::<u32>())),
            BookCategory::new("test".to_string()),
            AuthorId::new(uuid::Uuid::new_v4()),
            BookCopies::new(2),
        );
        let editor_id = UserId::new(uuid::Uuid::new_v4());

        let first = BookHistoryEntry::snapshot(&book, editor_id.clone());
        PostgresBookHistoryRepository.record(&mut con, &first).await?;

        let renamed = book.updated(Some(BookTitle::new("renamed".to_string())), None, None, None);
        let second = BookHistoryEntry::snapshot(&renamed, editor_id.clone());
        PostgresBookHistoryRepository
            .record(&mut con, &second)
            .await?;

        let entries = PostgresBookHistoryRepository
            .find_by_book_id(&mut con, renamed.id())
            .await?;
        assert_eq!(entries.len(), 2);
        // most recent first
        assert_eq!(entries[0].title().as_ref(), "renamed");
        assert_eq!(entries[1].title(), first.title());

        con.roll_back().await?;
        Ok(())
    }
}
