use premier_zone_types::player::Player;

use crate::models::{self as db_models};

impl From<db_models::Player> for Player {
    fn from(row: db_models::Player) -> Self {
        Player {
            id: row.id,
            name: row.name,
            team: row.team,
            position: row.position,
            nation: row.nation,
        }
    }
}
