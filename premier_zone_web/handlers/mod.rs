mod helpers;
mod player_handler;

pub(crate) use helpers::*;
pub use player_handler::{add_player, delete_player, get_players, update_player};
