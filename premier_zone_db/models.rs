use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub position: String,
    pub nation: String,
}
