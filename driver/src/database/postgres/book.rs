use error_stack::Report;
use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{AuthorId, Book, BookCategory, BookCopies, BookId, BookTitle};
use kernel::{KernelError, RejectedBook};

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PostgresTransaction> for PostgresBookRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl BookModifier<PostgresTransaction> for PostgresBookRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn reserve(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::reserve(con, id).await
    }

    async fn release(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::release(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    category: String,
    author_id: Uuid,
    copies: i32,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookCategory::new(value.category),
            AuthorId::new(value.author_id),
            BookCopies::new(value.copies),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, category, author_id, copies
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn create(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO books (id, title, category, author_id, copies)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.category().as_ref())
        .bind(book.author_id().as_ref())
        .bind(book.copies().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, book: &Book) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, category = $3, author_id = $4, copies = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.category().as_ref())
        .bind(book.author_id().as_ref())
        .bind(book.copies().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn reserve(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        // The predicate is re-evaluated after any row-lock wait, so the count
        // never drops below zero no matter how calls interleave.
        let updated = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET copies = copies - 1
            WHERE id = $1 AND copies > 0
            RETURNING id, title, category, author_id, copies
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&mut *con)
        .await
        .convert_error()?;
        match updated {
            Some(row) => Ok(Book::from(row)),
            None => match Self::find_by_id(con, id).await? {
                Some(book) => Err(Report::new(KernelError::InsufficientCopies)
                    .attach_printable(RejectedBook::from(&book))),
                None => Err(Report::new(KernelError::NotFound)),
            },
        }
    }

    async fn release(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        let updated = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET copies = copies + 1
            WHERE id = $1
            RETURNING id, title, category, author_id, copies
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        updated
            .map(Book::from)
            .ok_or_else(|| Report::new(KernelError::NotFound))
    }
}
