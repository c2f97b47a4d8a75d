//! Application state - shared across all handlers.

use std::sync::Arc;

use roster_core::UserService;
use roster_core::ports::UserRepository;
use roster_infra::InMemoryUserRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    /// Name of the store backing `users`, reported by the health check.
    pub store: &'static str,
}

impl AppState {
    /// Wrap an already-built repository.
    pub fn with_repository(repo: Arc<dyn UserRepository>, store: &'static str) -> Self {
        Self {
            users: UserService::new(repo),
            store,
        }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()), "memory")
    }

    /// Build the application state with appropriate implementations.
    #[cfg(feature = "postgres")]
    pub async fn new(config: &AppConfig) -> Self {
        use migration::{Migrator, MigratorTrait};
        use roster_infra::PostgresUserRepository;
        use roster_infra::database::connect;

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        let conn = match connect(db_config).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Self::in_memory();
            }
        };

        if config.run_migrations {
            if let Err(e) = Migrator::up(&conn, None).await {
                tracing::error!("Failed to apply migrations: {}", e);
            } else {
                tracing::info!("Migrations applied");
            }
        }

        let state = Self::with_repository(Arc::new(PostgresUserRepository::new(conn)), "postgres");
        tracing::info!("Application state initialized");
        state
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn new(_config: &AppConfig) -> Self {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Self::in_memory()
    }
}
