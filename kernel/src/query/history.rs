use crate::database::Transaction;
use crate::entity::{BookHistoryEntry, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookHistoryQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Entries for one book, most recent first.
    async fn find_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookHistoryEntry>, KernelError>;
}

pub trait DependOnBookHistoryQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookHistoryQuery: BookHistoryQuery<Connection>;
    fn book_history_query(&self) -> &Self::BookHistoryQuery;
}
