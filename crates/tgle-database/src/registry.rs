//! Repository set selected by configuration.

use std::sync::Arc;

use tracing::info;

use tgle_core::config::DatabaseConfig;
use tgle_core::error::AppError;
use tgle_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{
    self, MemoryArtistLikeRepository, MemoryArtistRepository, MemoryConcertRepository,
    MemoryUserRepository,
};
use crate::migration::run_migrations;
use crate::repositories::{
    ArtistLikeRepository, ArtistRepository, ConcertRepository, PgArtistLikeRepository,
    PgArtistRepository, PgConcertRepository, PgUserRepository, UserRepository,
};

#[derive(Debug, Clone)]
enum Backend {
    Postgres(DatabasePool),
    Memory,
}

/// All repositories of one backend.
#[derive(Debug, Clone)]
pub struct Repositories {
    /// User repository.
    pub users: Arc<dyn UserRepository>,
    /// Artist repository.
    pub artists: Arc<dyn ArtistRepository>,
    /// Concert repository.
    pub concerts: Arc<dyn ConcertRepository>,
    /// Artist like repository.
    pub artist_likes: Arc<dyn ArtistLikeRepository>,
    backend: Backend,
}

impl Repositories {
    /// Build repositories for the configured provider (`postgres` or `memory`).
    ///
    /// For PostgreSQL this connects the pool and, if enabled, runs migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let db = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            "memory" => {
                info!("Using in-memory repositories");
                Ok(Self::in_memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Repositories over an existing PostgreSQL pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            artists: Arc::new(PgArtistRepository::new(pool.clone())),
            concerts: Arc::new(PgConcertRepository::new(pool.clone())),
            artist_likes: Arc::new(PgArtistLikeRepository::new(pool)),
            backend: Backend::Postgres(db),
        }
    }

    /// Repositories over a fresh in-memory store.
    pub fn in_memory() -> Self {
        let store = memory::new_store();
        Self {
            users: Arc::new(MemoryUserRepository::new(store.clone())),
            artists: Arc::new(MemoryArtistRepository::new(store.clone())),
            concerts: Arc::new(MemoryConcertRepository::new(store.clone())),
            artist_likes: Arc::new(MemoryArtistLikeRepository::new(store)),
            backend: Backend::Memory,
        }
    }

    /// Name of the active backend.
    pub fn provider_name(&self) -> &'static str {
        match self.backend {
            Backend::Postgres(_) => "postgres",
            Backend::Memory => "memory",
        }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.backend {
            Backend::Postgres(db) => db.health_check().await,
            Backend::Memory => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Backend::Postgres(db) = &self.backend {
            db.close().await;
        }
    }
}
