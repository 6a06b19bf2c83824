use premier_zone_types::errors::ApplicationError;
use premier_zone_types::player::Player;

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns every player, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<Player>, ApplicationError>;

    /// Returns the first player (natural order) whose name is exactly `name`.
    /// Names are not unique.
    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError>;

    /// Saves a player (creates if new, updates if exists).
    async fn save(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Removes every player named exactly `name` and returns how many went.
    async fn delete_by_name(&self, name: &str) -> Result<u64, ApplicationError>;
}
