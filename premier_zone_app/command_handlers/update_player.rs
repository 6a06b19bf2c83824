use premier_zone_types::Result;
use premier_zone_types::player::Player;

use crate::{
    cqrs::{CommandHandler, commands::UpdatePlayer},
    uow::UnitOfWork,
};

pub struct UpdatePlayerCommandHandler {}

impl Default for UpdatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdatePlayer> for UpdatePlayerCommandHandler {
    async fn handle(
        &self,
        command: UpdatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Option<Player>> {
        let player_repo = uow.players();

        let Some(mut player) = player_repo.find_by_name(&command.data.name).await? else {
            tracing::debug!(name = %command.data.name, "No player to update");
            return Ok(None);
        };

        player.overwrite(command.data);
        player_repo.save(&player).await?;

        tracing::info!(id = %player.id, name = %player.name, "Player updated");
        Ok(Some(player))
    }
}
