use chrono::Local;
use daily_report::{router, AccountStore, AppConfig, AppState, JsonFileStore, Session};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    fs::create_dir_all(&config.data_dir).await?;

    let backend = Arc::new(JsonFileStore::new(&config.data_dir));
    info!("storing accounts under {}", backend.dir().display());

    let accounts = AccountStore::load(backend).await;
    let session = Session::new(Local::now().date_naive());
    let state = AppState::new(accounts, session, config.include_comments);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
