use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use premier_zone_app::repository::PlayerRepository;
use premier_zone_types::{
    errors::{ApplicationError, DbError},
    player::Player,
};

use crate::models::{self as db_models};

const SELECT_ALL: &str = r#"
    SELECT id, name, team, position, nation
    FROM players
    ORDER BY created_at, id
"#;

const SELECT_FIRST_BY_NAME: &str = r#"
    SELECT id, name, team, position, nation
    FROM players
    WHERE name = $1
    ORDER BY created_at, id
    LIMIT 1
"#;

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Player>(SELECT_ALL)
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::Player>(SELECT_FIRST_BY_NAME)
            .bind(name)
            .fetch_optional(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
              INSERT INTO players (id, name, team, position, nation)
              VALUES ($1, $2, $3, $4, $5)
              ON CONFLICT (id) DO UPDATE
              SET
                  name = $2,
                  team = $3,
                  position = $4,
                  nation = $5
              "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(&player.team)
        .bind(&player.position)
        .bind(&player.nation)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let result = sqlx::query("DELETE FROM players WHERE name = $1")
            .bind(name)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(result.rows_affected())
    }
}
