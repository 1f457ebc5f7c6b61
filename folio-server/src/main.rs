//! Portfolio site backend: gallery and profile JSON endpoints plus the
//! image/PDF relay.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use core_gallery::GalleryService;
use core_http::ReqwestHttpClient;
use core_runtime::logging::{init_logging, LoggingConfig};
use core_runtime::GalleryConfig;
use provider_github::GitHubConnector;

mod routes;
mod state;

use state::AppState;

#[derive(Parser)]
#[command(name = "folio-server")]
#[command(about = "Portfolio gallery and asset relay server")]
struct Cli {
    /// Port to bind
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Account handle whose repositories feed the gallery
    #[arg(long)]
    account: String,

    /// Maximum number of repositories to list, newest first
    #[arg(long, default_value = "10")]
    limit: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig::default()).context("Failed to initialize logging")?;

    let config = GalleryConfig::builder()
        .account_handle(&cli.account)
        .credential_from_env()
        .repository_limit(cli.limit)
        .build()
        .context("Invalid gallery configuration")?;

    if !config.has_credential() {
        info!("No API credential found, gallery and profile will serve empty results");
    }

    let http_client = Arc::new(ReqwestHttpClient::new());
    let connector = Arc::new(GitHubConnector::new(http_client, config.credential.clone()));
    let gallery = Arc::new(GalleryService::new(connector, config));

    let app = routes::router(AppState::new(gallery)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("Server exited")?;
    Ok(())
}
