use crate::database::Transaction;
use crate::entity::BookHistoryEntry;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookHistoryModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Appends one entry. The trail is append-only; no update or delete
    /// operation exists.
    async fn record(
        &self,
        con: &mut Connection,
        entry: &BookHistoryEntry,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookHistoryModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookHistoryModifier: BookHistoryModifier<Connection>;
    fn book_history_modifier(&self) -> &Self::BookHistoryModifier;
}
