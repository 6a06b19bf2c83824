use premier_zone_types::player::Player;

use crate::{cqrs::Query, player_filter::PlayerFilter};

/// List the players selected by a filter.
pub struct ListPlayers {
    pub filter: PlayerFilter,
}

impl Query for ListPlayers {
    type Output = Vec<Player>;
}
