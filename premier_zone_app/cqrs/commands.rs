use premier_zone_types::player::{Player, PlayerData};

use crate::cqrs::Command;

/// Store a new player. Duplicate names are accepted.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub data: PlayerData,
}

impl CreatePlayer {
    pub fn new(data: PlayerData) -> Self {
        Self { data }
    }
}

impl Command for CreatePlayer {
    type Output = Player;
}

/// Overwrite the player whose name matches `data.name`.
/// Yields `None` when no such player exists.
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub data: PlayerData,
}

impl UpdatePlayer {
    pub fn new(data: PlayerData) -> Self {
        Self { data }
    }
}

impl Command for UpdatePlayer {
    type Output = Option<Player>;
}

/// Remove every player with exactly this name.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    pub name: String,
}

impl DeletePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for DeletePlayer {
    type Output = ();
}
