use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    async fn update(
        &self,
        con: &mut Connection,
        book: &Book,
    ) -> error_stack::Result<(), KernelError>;

    /// Atomic check-then-decrement of the copy counter. Must be safe against
    /// concurrent callers reserving the same book: the stored count is only
    /// decremented while still positive.
    async fn reserve(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError>;

    /// Inverse increment, for adapters that compensate instead of rolling
    /// back a native transaction.
    async fn release(
        &self,
        con: &mut Connection,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}
