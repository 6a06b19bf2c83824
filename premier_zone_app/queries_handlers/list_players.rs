use async_trait::async_trait;

use premier_zone_types::errors::ApplicationError;

use crate::{
    cqrs::{Query, QueryHandler, queries::ListPlayers},
    uow::UnitOfWork,
};

/// Loads the full table and filters it in memory.
pub struct ListPlayersHandler {}

impl Default for ListPlayersHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ListPlayersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListPlayers> for ListPlayersHandler {
    async fn handle(
        &self,
        query: ListPlayers,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<<ListPlayers as Query>::Output, ApplicationError> {
        let players = uow.players().find_all().await?;
        let total = players.len();
        let selected = query.filter.apply(players);

        tracing::debug!(
            filter = ?query.filter,
            total,
            selected = selected.len(),
            "Listed players"
        );

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use premier_zone_types::{
        Result,
        player::{Player, PlayerData},
    };

    use super::*;
    use crate::{
        player_filter::{PlayerFilter, PlayerSearch},
        test_utils::tests::{MockPlayerRepository, MockUnitOfWork},
    };

    fn seeded_uow() -> Box<dyn UnitOfWork<'static>> {
        let players = MockPlayerRepository::with_players(vec![
            Player::new(PlayerData::new("Salah", "Liverpool", "FW", "Egypt")),
            Player::new(PlayerData::new("Alisson", "Liverpool", "GK", "Brazil")),
            Player::new(PlayerData::new("Saka", "Arsenal", "RW", "England")),
            Player::new(PlayerData::new("Rice", "arsenal", "DM", "England")),
        ]);
        Box::new(MockUnitOfWork::with_players(players))
    }

    async fn list(filter: PlayerFilter) -> Result<Vec<String>> {
        let uow = seeded_uow();
        let players = ListPlayersHandler::new()
            .handle(ListPlayers { filter }, &uow)
            .await?;

        Ok(players.into_iter().map(|p| p.name).collect())
    }

    #[tokio::test]
    async fn test_list_all_players() -> Result<()> {
        assert_eq!(
            list(PlayerFilter::All).await?,
            vec!["Salah", "Alisson", "Saka", "Rice"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_list_players_by_team() -> Result<()> {
        assert_eq!(
            list(PlayerFilter::Team("Arsenal".to_string())).await?,
            vec!["Saka"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_list_players_from_search_params() -> Result<()> {
        let search = PlayerSearch {
            team: Some("Liverpool".to_string()),
            position: Some("GK".to_string()),
            ..Default::default()
        };

        assert_eq!(list(search.into()).await?, vec!["Alisson"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_players_by_nation() -> Result<()> {
        assert_eq!(
            list(PlayerFilter::NationContains("england".to_string())).await?,
            vec!["Saka", "Rice"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_default_handler_lists_like_new() -> Result<()> {
        let uow = seeded_uow();
        let players = ListPlayersHandler::default()
            .handle(
                ListPlayers {
                    filter: PlayerFilter::NameContains("SA".to_string()),
                },
                &uow,
            )
            .await?;

        let names: Vec<String> = players.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Salah", "Saka"]);
        Ok(())
    }
}
