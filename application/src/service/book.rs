use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{
    BookHistoryModifier, BookModifier, DependOnBookHistoryModifier, DependOnBookModifier,
};
use kernel::prelude::entity::{
    AuthorId, Book, BookCategory, BookCopies, BookHistoryEntry, BookId, BookTitle, UserId,
};
use kernel::KernelError;

use crate::service::settle;
use crate::transfer::{BookDto, CreateBookDto, GetBookDto, UpdateBookDto};

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let id = BookId::new(dto.id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<Option<BookDto>, KernelError> = async {
            let book = self.book_query().find_by_id(&mut con, &id).await?;
            Ok(book.map(BookDto::from))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookHistoryModifier<Connection>
{
    /// Librarian write path: the book row and its audit snapshot land in the
    /// same transaction.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<Uuid, KernelError> {
        if dto.copies < 0 {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable("copy count must not be negative"));
        }
        let id = Uuid::new_v4();
        let book = Book::new(
            BookId::new(id),
            BookTitle::new(dto.title),
            BookCategory::new(dto.category),
            AuthorId::new(dto.author_id),
            BookCopies::new(dto.copies),
        );
        let editor_id = UserId::new(dto.editor_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<Uuid, KernelError> = async {
            self.book_modifier().create(&mut con, &book).await?;
            let entry = BookHistoryEntry::snapshot(&book, editor_id.clone());
            self.book_history_modifier().record(&mut con, &entry).await?;
            Ok(id)
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookHistoryModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookHistoryModifier<Connection>
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        if matches!(dto.copies, Some(copies) if copies < 0) {
            return Err(Report::new(KernelError::InvalidState)
                .attach_printable("copy count must not be negative"));
        }
        let id = BookId::new(dto.id);
        let editor_id = UserId::new(dto.editor_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<BookDto, KernelError> = async {
            let book = self
                .book_query()
                .find_by_id(&mut con, &id)
                .await?
                .ok_or_else(|| Report::new(KernelError::NotFound))?;
            let book = book.updated(
                dto.title.map(BookTitle::new),
                dto.category.map(BookCategory::new),
                dto.author_id.map(AuthorId::new),
                dto.copies.map(BookCopies::new),
            );
            self.book_modifier().update(&mut con, &book).await?;
            let entry = BookHistoryEntry::snapshot(&book, editor_id.clone());
            self.book_history_modifier().record(&mut con, &entry).await?;
            Ok(BookDto::from(book))
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookHistoryModifier<Connection>
{
}
