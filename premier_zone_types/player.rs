use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    #[serde(rename = "pos", alias = "position")]
    pub position: String,
    pub nation: String,
}

impl Player {
    /// Builds a new record with a freshly assigned id.
    pub fn new(data: PlayerData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            team: data.team,
            position: data.position,
            nation: data.nation,
        }
    }

    /// Overwrites every mutable field, keeping the id.
    pub fn overwrite(&mut self, data: PlayerData) {
        self.name = data.name;
        self.team = data.team;
        self.position = data.position;
        self.nation = data.nation;
    }
}

/// Player fields as sent by clients. Any `id` in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    pub name: String,
    pub team: String,
    #[serde(rename = "pos", alias = "position")]
    pub position: String,
    pub nation: String,
}

impl PlayerData {
    pub fn new(name: &str, team: &str, position: &str, nation: &str) -> Self {
        Self {
            name: name.to_string(),
            team: team.to_string(),
            position: position.to_string(),
            nation: nation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_gets_an_id() {
        let a = Player::new(PlayerData::new("Salah", "Liverpool", "FW", "EGY"));
        let b = Player::new(PlayerData::new("Salah", "Liverpool", "FW", "EGY"));

        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Salah");
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut player = Player::new(PlayerData::new("Kane", "Tottenham", "FW", "ENG"));
        let id = player.id;

        player.overwrite(PlayerData::new("Kane", "Bayern", "CF", "England"));

        assert_eq!(player.id, id);
        assert_eq!(player.team, "Bayern");
        assert_eq!(player.position, "CF");
        assert_eq!(player.nation, "England");
    }

    #[test]
    fn test_position_is_serialized_as_pos() {
        let player = Player::new(PlayerData::new("Saka", "Arsenal", "RW", "ENG"));
        let json = serde_json::to_value(&player).unwrap();

        assert_eq!(json["pos"], "RW");
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_player_data_accepts_position_alias_and_ignores_id() {
        let data: PlayerData = serde_json::from_str(
            r#"{"id": "not-used", "name": "Rice", "team": "Arsenal", "position": "DM", "nation": "ENG"}"#,
        )
        .unwrap();

        assert_eq!(data, PlayerData::new("Rice", "Arsenal", "DM", "ENG"));
    }
}
