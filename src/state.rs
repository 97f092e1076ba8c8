use std::sync::Arc;

use crate::auth::repo::{InMemoryUserRepository, PgUserRepository, UserRepository};
use crate::config::AppConfig;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn from_parts(config: Arc<AppConfig>, users: Arc<dyn UserRepository>) -> Self {
        Self { config, users }
    }

    /// State backed by an already connected Postgres pool.
    pub fn with_pool(config: Arc<AppConfig>, db: PgPool) -> Self {
        let users = Arc::new(PgUserRepository::new(db)) as Arc<dyn UserRepository>;
        Self::from_parts(config, users)
    }

    /// State backed by a process-local store; nothing touches a database.
    pub fn in_memory(config: AppConfig) -> (Self, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let users = repo.clone() as Arc<dyn UserRepository>;
        (Self::from_parts(Arc::new(config), users), repo)
    }
}
