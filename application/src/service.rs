mod book;
mod checkout;
mod history;
mod wishlist;

pub use self::{book::*, checkout::*, history::*, wishlist::*};

use kernel::interface::database::Transaction;
use kernel::KernelError;

/// Closes a unit of work: commit on success, explicit roll back on any typed
/// failure so no partial mutation stays visible.
pub(crate) async fn settle<Connection, T>(
    con: Connection,
    result: error_stack::Result<T, KernelError>,
) -> error_stack::Result<T, KernelError>
where
    Connection: Transaction,
{
    match result {
        Ok(value) => {
            con.commit().await?;
            Ok(value)
        }
        Err(report) => {
            con.roll_back().await?;
            Err(report)
        }
    }
}
