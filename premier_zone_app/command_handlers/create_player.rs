use premier_zone_types::Result;
use premier_zone_types::player::Player;

use crate::{
    cqrs::{CommandHandler, commands::CreatePlayer},
    uow::UnitOfWork,
};

pub struct CreatePlayerCommandHandler {}

impl Default for CreatePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreatePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreatePlayer> for CreatePlayerCommandHandler {
    async fn handle(
        &self,
        command: CreatePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<Player> {
        let player = Player::new(command.data);
        uow.players().save(&player).await?;

        tracing::info!(id = %player.id, name = %player.name, "Player created");
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use premier_zone_types::Result;
    use premier_zone_types::player::PlayerData;

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_create_player_handler_success() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();
        let data = PlayerData::new("Salah", "Liverpool", "FW", "Egypt");

        let created = handler
            .handle(CreatePlayer::new(data.clone()), &mock_uow)
            .await?;

        assert_eq!(created.name, data.name);
        assert_eq!(created.team, data.team);
        assert_eq!(created.position, data.position);
        assert_eq!(created.nation, data.nation);

        let all = mock_uow.players().find_all().await?;
        assert_eq!(all, vec![created]);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_player_allows_duplicate_names() -> Result<()> {
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreatePlayerCommandHandler::new();
        let data = PlayerData::new("Kane", "Tottenham", "FW", "England");

        let first = handler
            .handle(CreatePlayer::new(data.clone()), &mock_uow)
            .await?;
        let second = handler.handle(CreatePlayer::new(data), &mock_uow).await?;

        assert_ne!(first.id, second.id);
        assert_eq!(mock_uow.players().find_all().await?.len(), 2);

        Ok(())
    }
}
