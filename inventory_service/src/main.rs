use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::api::auth::session::SessionStore;
use crate::api::auth::verifier::StaticCredentials;
use crate::api::context::AppState;

mod api;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse our configuration from the environment.
    let config = config::Config::from_env().context("expected to be able to generate config")?;

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("could not connect to db")?;

    inventory_db_client::init::init_db(&db)
        .await
        .context("could not initialize schema")?;

    tracing::trace!("initialized db connection");

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("failed to bind to port")?;

    tracing::info!("inventory service is up and running on port {}", config.port);

    let service = api::service(AppState {
        db,
        sessions: SessionStore::default(),
        credentials: Arc::new(StaticCredentials::default()),
    });

    axum::serve(listener, service)
        .await
        .context("error starting service")?;

    Ok(())
}
