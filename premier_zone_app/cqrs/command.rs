use async_trait::async_trait;
use premier_zone_types::errors::ApplicationError;

use crate::uow::UnitOfWork;

/// A marker trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// The data type handed back once the command has been applied.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Commands.
/// It receives the command and a Unit of Work to use.
/// It should NOT manage the transaction lifecycle (commit/rollback);
/// that is the job of the AppBus.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
    ) -> Result<C::Output, ApplicationError>;
}
