use anyhow::Context;

use travelstore_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    travelstore_observability::init(&config.log);
    tracing::info!(addr = %config.addr, log_format = ?config.log.format, "configuration loaded");

    let app = travelstore_api::app::build_app(travelstore_catalog::seed::catalog());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
