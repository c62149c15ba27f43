//! Wiring from [`ServerConfig`] to a ready-to-serve router.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use reel_core::{
    memory::MemoryProfileStore,
    policy::{ContentPolicy, InterestCatalog, WordBlacklist},
    ports::ProfileStore,
    service::{ProfileService, ProfileServiceImpl},
    validate::OnboardingValidator,
};
use reel_postgres::{connect, ensure_schema, DatabaseConfig, PgProfileStore};
use tracing::{info, warn};

use crate::config::{ServerConfig, StoreBackend};
use crate::middleware::jwt::JwtConfig;
use crate::router::build_router;

pub fn load_blacklist(config: &ServerConfig) -> anyhow::Result<WordBlacklist> {
    match &config.blacklist_path {
        Some(path) => {
            let list = WordBlacklist::from_file(path)?;
            info!(words = list.len(), path = %path.display(), "loaded blacklist");
            Ok(list)
        }
        None => Ok(WordBlacklist::default()),
    }
}

pub async fn build_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn ProfileStore>> {
    match config.store {
        StoreBackend::Memory => {
            warn!("using in-memory profile store; data is lost on restart");
            Ok(Arc::new(MemoryProfileStore::new()))
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .context("DATABASE_URL must be set when REEL_STORE=postgres")?;
            let db = DatabaseConfig::new(url).with_max_connections(config.pool_size);
            let pool = connect(&db).await.context("failed to connect to database")?;
            ensure_schema(&pool)
                .await
                .context("failed to create profiles schema")?;
            Ok(Arc::new(PgProfileStore::new(pool)))
        }
    }
}

pub fn build_service(
    store: Arc<dyn ProfileStore>,
    content: Arc<dyn ContentPolicy>,
) -> Arc<dyn ProfileService> {
    let validator = OnboardingValidator::new(InterestCatalog::default(), content);
    Arc::new(ProfileServiceImpl::new(store, validator))
}

pub async fn build_app(config: &ServerConfig) -> anyhow::Result<Router> {
    let content: Arc<dyn ContentPolicy> = Arc::new(load_blacklist(config)?);
    let store = build_store(config).await?;
    let service = build_service(store, content);
    Ok(build_router(
        service,
        JwtConfig::from_secret(config.jwt_secret.as_bytes()),
    ))
}
