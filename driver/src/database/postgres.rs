use std::ops::{Deref, DerefMut};

use error_stack::Report;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnBookHistoryQuery, DependOnBookQuery, DependOnWishlistQuery,
};
use kernel::interface::update::{
    DependOnBookHistoryModifier, DependOnBookModifier, DependOnWishlistModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{book::*, history::*, wishlist::*};

mod book;
mod history;
mod wishlist;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|error| Report::from(error).change_context(KernelError::Internal))?;
        tracing::debug!("connected to postgres, migrations applied");
        Ok(Self { pool })
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl DependOnBookQuery<PostgresTransaction> for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier<PostgresTransaction> for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnWishlistQuery<PostgresTransaction> for PostgresDatabase {
    type WishlistQuery = PostgresWishlistRepository;
    fn wishlist_query(&self) -> &Self::WishlistQuery {
        &PostgresWishlistRepository
    }
}

impl DependOnWishlistModifier<PostgresTransaction> for PostgresDatabase {
    type WishlistModifier = PostgresWishlistRepository;
    fn wishlist_modifier(&self) -> &Self::WishlistModifier {
        &PostgresWishlistRepository
    }
}

impl DependOnBookHistoryQuery<PostgresTransaction> for PostgresDatabase {
    type BookHistoryQuery = PostgresBookHistoryRepository;
    fn book_history_query(&self) -> &Self::BookHistoryQuery {
        &PostgresBookHistoryRepository
    }
}

impl DependOnBookHistoryModifier<PostgresTransaction> for PostgresDatabase {
    type BookHistoryModifier = PostgresBookHistoryRepository;
    fn book_history_modifier(&self) -> &Self::BookHistoryModifier {
        &PostgresBookHistoryRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
