mod config;
mod repos;

pub use config::{Config, DatabaseConfig};
pub use repos::{ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo, RepoError, Repos};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{error, info};

#[derive(Clone)]
pub struct RegistryContext {
    pub repos: Repos,
    pub config: Config,
}

impl RegistryContext {
    async fn create(config: Config) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database)?;
        if config.run_migrations {
            // The service stays up without a database, requests will
            // report it as unavailable until it comes back.
            if let Err(e) = run_migration(&pool).await {
                error!("Unable to run migrations: {:?}", e);
            }
        }

        Ok(Self {
            repos: Repos::create_postgres(pool),
            config,
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<RegistryContext> {
    RegistryContext::create(Config::new()).await
}

fn connect_options(config: &DatabaseConfig) -> anyhow::Result<PgConnectOptions> {
    let options = match &config.url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name),
    };
    Ok(options)
}

/// Connections are opened on first use, so this succeeds even when the
/// database is unreachable
pub fn create_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(connect_options(config)?);
    Ok(pool)
}

pub async fn run_migration(pool: &PgPool) -> anyhow::Result<()> {
    info!("Running migrations ...");
    sqlx::migrate!().run(pool).await?;
    info!("Running migrations ... [done]");
    Ok(())
}
