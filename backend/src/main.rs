//! Backend entry-point: loads settings, prepares storage and serves HTTP.

mod server;

#[cfg(feature = "metrics")]
use server::make_metrics;
use server::{ServerConfig, create_server};

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use wisdom_wall::inbound::http::health::HealthState;
use wisdom_wall::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use wisdom_wall::settings::WisdomSettings;

fn config_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
}

/// Run migrations and open the pool when a database URL is configured.
async fn connect_database(settings: &WisdomSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        return Ok(None);
    };

    run_migrations(url).await.map_err(std::io::Error::other)?;
    let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    info!(?config, "connecting to PostgreSQL");
    let pool = DbPool::new(config)
        .await
        .map_err(std::io::Error::other)?;
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WisdomSettings::load_from_iter(std::env::args_os()).map_err(config_error)?;
    let bind_addr = settings.bind_addr().map_err(config_error)?;
    let policy = settings.hiring_trait_policy().map_err(config_error)?;
    let db_pool = connect_database(&settings).await?;

    let config = ServerConfig::new(bind_addr)
        .with_db_pool(db_pool)
        .with_hiring_trait_policy(policy);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "wisdom wall listening");
    server.await
}
