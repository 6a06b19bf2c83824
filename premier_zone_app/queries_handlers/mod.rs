mod list_players;

pub use list_players::ListPlayersHandler;
