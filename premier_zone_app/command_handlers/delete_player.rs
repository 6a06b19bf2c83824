use premier_zone_types::Result;

use crate::{
    cqrs::{CommandHandler, commands::DeletePlayer},
    uow::UnitOfWork,
};

pub struct DeletePlayerCommandHandler {}

impl Default for DeletePlayerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePlayerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePlayer> for DeletePlayerCommandHandler {
    async fn handle(
        &self,
        command: DeletePlayer,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<()> {
        let removed = uow.players().delete_by_name(&command.name).await?;

        tracing::info!(name = %command.name, removed, "Players deleted");
        Ok(())
    }
}
