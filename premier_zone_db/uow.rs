use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use premier_zone_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use premier_zone_types::errors::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let tx_arc = Arc::new(Mutex::new(tx));

        Ok(Box::new(PostgresUnitOfWork { tx: tx_arc }))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
        Arc::new(PostgresPlayerRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        // Try to unwrap the Arc to get ownership of the Mutex<Transaction>.
        // If this fails, a repository still holds the transaction;
        // it cannot be committed and will rollback on Drop.
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .commit()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        } else {
            return Err(ApplicationError::Db(DbError::Transaction(
                "transaction still has multiple owners".to_string(),
            )));
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .rollback()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }
        Ok(())
    }
}
