use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookHistoryQuery, DependOnBookHistoryQuery};
use kernel::prelude::entity::BookId;
use kernel::KernelError;

use crate::service::settle;
use crate::transfer::{BookHistoryDto, GetBookHistoryDto};

#[async_trait::async_trait]
pub trait GetBookHistoryService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookHistoryQuery<Connection>
{
    async fn get_history(
        &self,
        dto: GetBookHistoryDto,
    ) -> error_stack::Result<Vec<BookHistoryDto>, KernelError> {
        let book_id = BookId::new(dto.book_id);
        let mut con = self.database_connection().transact().await?;
        let result: error_stack::Result<Vec<BookHistoryDto>, KernelError> = async {
            let entries = self
                .book_history_query()
                .find_by_book_id(&mut con, &book_id)
                .await?;
            Ok(entries.into_iter().map(BookHistoryDto::from).collect())
        }
        .await;
        settle(con, result).await
    }
}

impl<Connection: Transaction + Send, T> GetBookHistoryService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookHistoryQuery<Connection>
{
}
