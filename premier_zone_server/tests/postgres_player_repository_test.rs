use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use premier_zone_app::repository::PlayerRepository;
use premier_zone_db::{PostgresPlayerRepository, establish_test_connection_pool};
use premier_zone_types::{
    Result,
    errors::DbError,
    player::{Player, PlayerData},
};

async fn setup_pool() -> Result<PgPool> {
    let pool = establish_test_connection_pool().await?;
    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .map_err(DbError::Migration)?;
    Ok(pool)
}

fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

async fn rollback(tx: Arc<Mutex<Transaction<'_, Postgres>>>) {
    if let Ok(mutex) = Arc::try_unwrap(tx) {
        mutex.into_inner().rollback().await.unwrap();
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_save_then_find_all_keeps_insertion_order() -> Result<()> {
    let pool = setup_pool().await?;
    let tx = Arc::new(Mutex::new(pool.begin().await.unwrap()));
    let repo = PostgresPlayerRepository::new(tx.clone());

    let first = Player::new(PlayerData::new(&unique_name("Salah"), "Liverpool", "FW", "Egypt"));
    let second = Player::new(PlayerData::new(&unique_name("Saka"), "Arsenal", "RW", "England"));
    repo.save(&first).await?;
    repo.save(&second).await?;

    let stored: Vec<Player> = repo
        .find_all()
        .await?
        .into_iter()
        .filter(|p| p.id == first.id || p.id == second.id)
        .collect();
    assert_eq!(stored, vec![first, second]);

    drop(repo);
    rollback(tx).await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_find_by_name_is_exact_and_returns_earliest() -> Result<()> {
    let pool = setup_pool().await?;
    let tx = Arc::new(Mutex::new(pool.begin().await.unwrap()));
    let repo = PostgresPlayerRepository::new(tx.clone());

    let name = unique_name("Kane");
    let earliest = Player::new(PlayerData::new(&name, "Tottenham", "FW", "England"));
    let later = Player::new(PlayerData::new(&name, "Bayern", "CF", "England"));
    repo.save(&earliest).await?;
    repo.save(&later).await?;

    assert_eq!(repo.find_by_name(&name).await?, Some(earliest));
    assert_eq!(repo.find_by_name(&name.to_uppercase()).await?, None);

    drop(repo);
    rollback(tx).await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_save_existing_id_overwrites_fields() -> Result<()> {
    let pool = setup_pool().await?;
    let tx = Arc::new(Mutex::new(pool.begin().await.unwrap()));
    let repo = PostgresPlayerRepository::new(tx.clone());

    let name = unique_name("Rice");
    let mut player = Player::new(PlayerData::new(&name, "West Ham", "DM", "England"));
    repo.save(&player).await?;

    player.overwrite(PlayerData::new(&name, "Arsenal", "CM", "ENG"));
    repo.save(&player).await?;

    assert_eq!(repo.find_by_name(&name).await?, Some(player));

    drop(repo);
    rollback(tx).await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_delete_by_name_removes_every_match() -> Result<()> {
    let pool = setup_pool().await?;
    let tx = Arc::new(Mutex::new(pool.begin().await.unwrap()));
    let repo = PostgresPlayerRepository::new(tx.clone());

    let name = unique_name("Alisson");
    repo.save(&Player::new(PlayerData::new(&name, "Liverpool", "GK", "Brazil")))
        .await?;
    repo.save(&Player::new(PlayerData::new(&name, "Roma", "GK", "Brazil")))
        .await?;

    assert_eq!(repo.delete_by_name(&name).await?, 2);
    assert_eq!(repo.delete_by_name(&name).await?, 0);
    assert_eq!(repo.find_by_name(&name).await?, None);

    drop(repo);
    rollback(tx).await;
    Ok(())
}
