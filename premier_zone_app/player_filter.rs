use serde::Deserialize;

use premier_zone_types::player::Player;

/// Optional search parameters as they arrive from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerSearch {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub nation: Option<String>,
}

/// Which subset of players a listing returns.
///
/// Team comparisons are exact and case-sensitive. The `*Contains` variants
/// are case-insensitive substring tests, so an empty needle matches every
/// player. `TeamAndPosition` compares both fields exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerFilter {
    All,
    Team(String),
    NameContains(String),
    PositionContains(String),
    NationContains(String),
    TeamAndPosition { team: String, position: String },
}

/// Picks a filter from the parameters present, first match wins:
/// team + position, then team, then name, then everything.
///
/// A lone `position` or `nation` is accepted but falls through to `All`.
impl From<PlayerSearch> for PlayerFilter {
    fn from(search: PlayerSearch) -> Self {
        match search {
            PlayerSearch {
                team: Some(team),
                position: Some(position),
                ..
            } => PlayerFilter::TeamAndPosition { team, position },
            PlayerSearch {
                team: Some(team), ..
            } => PlayerFilter::Team(team),
            PlayerSearch {
                name: Some(name), ..
            } => PlayerFilter::NameContains(name),
            _ => PlayerFilter::All,
        }
    }
}

impl PlayerFilter {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            PlayerFilter::All => true,
            PlayerFilter::Team(team) => player.team == *team,
            PlayerFilter::NameContains(text) => contains_ignore_case(&player.name, text),
            PlayerFilter::PositionContains(text) => contains_ignore_case(&player.position, text),
            PlayerFilter::NationContains(text) => contains_ignore_case(&player.nation, text),
            PlayerFilter::TeamAndPosition { team, position } => {
                player.team == *team && player.position == *position
            }
        }
    }

    /// Keeps the matching players, preserving their order.
    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        players.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
