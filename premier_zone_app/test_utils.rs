#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use premier_zone_types::{errors::ApplicationError, player::Player};

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// In-memory player store. Insertion order is the natural order.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        players: Arc<Mutex<Vec<Player>>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            Self {
                players: Arc::new(Mutex::new(players)),
            }
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
            Ok(self.players.lock().unwrap().clone())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Player>, ApplicationError> {
            Ok(self
                .players
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.name == name)
                .cloned())
        }

        async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
            let mut players = self.players.lock().unwrap();

            if let Some(existing) = players.iter_mut().find(|p| p.id == player.id) {
                *existing = player.clone();
            } else {
                players.push(player.clone());
            }
            Ok(())
        }

        async fn delete_by_name(&self, name: &str) -> Result<u64, ApplicationError> {
            let mut players = self.players.lock().unwrap();
            let before = players.len();
            players.retain(|p| p.name != name);
            Ok((before - players.len()) as u64)
        }
    }

    /// A store that is always down.
    #[derive(Default, Clone)]
    pub struct FailingPlayerRepository;

    fn unavailable() -> ApplicationError {
        ApplicationError::Infrastructure("player store unavailable".to_string())
    }

    #[async_trait]
    impl PlayerRepository for FailingPlayerRepository {
        async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
            Err(unavailable())
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Player>, ApplicationError> {
            Err(unavailable())
        }

        async fn save(&self, _player: &Player) -> Result<(), ApplicationError> {
            Err(unavailable())
        }

        async fn delete_by_name(&self, _name: &str) -> Result<u64, ApplicationError> {
            Err(unavailable())
        }
    }

    pub struct MockUnitOfWork {
        players: Arc<dyn PlayerRepository>,

        // Counters shared with the provider to check commit/rollback calls
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
    }

    impl Default for MockUnitOfWork {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Self::with_players(MockPlayerRepository::new())
        }

        pub fn with_players(players: MockPlayerRepository) -> Self {
            Self {
                players: Arc::new(players),
                commits: Arc::new(AtomicUsize::new(0)),
                rollbacks: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rollbacks.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work that all share one repository, so state
    /// written by a command is visible to later queries.
    pub struct MockUnitOfWorkProvider {
        players: Arc<dyn PlayerRepository>,
        commits: Arc<AtomicUsize>,
        rollbacks: Arc<AtomicUsize>,
    }

    impl Default for MockUnitOfWorkProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Self::with_repository(Arc::new(MockPlayerRepository::new()))
        }

        pub fn with_players(players: Vec<Player>) -> Self {
            Self::with_repository(Arc::new(MockPlayerRepository::with_players(players)))
        }

        pub fn with_repository(players: Arc<dyn PlayerRepository>) -> Self {
            Self {
                players,
                commits: Arc::new(AtomicUsize::new(0)),
                rollbacks: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn commits(&self) -> usize {
            self.commits.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.rollbacks.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                players: self.players.clone(),
                commits: self.commits.clone(),
                rollbacks: self.rollbacks.clone(),
            });
            Ok(uow)
        }
    }
}
