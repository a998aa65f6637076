mod api_models;
mod app;
mod handler;
mod routes;
mod services;
mod utils;

use std::net::SocketAddr;

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let log_cfg = utils::config::LogConfig::from_env();
    let _log_guard = utils::logging::init_logging(&log_cfg);

    let cfg = utils::config::ServerConfig::from_env()?;
    let data = utils::config::DataConfig::from_env();
    tracing::info!(
        "DJI data: {}, edge data: {}",
        data.dji_csv.display(),
        data.edge_csv.display()
    );

    let addr: SocketAddr = cfg.addr;
    let app = app::build_app(data);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind failed on {}", addr))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
