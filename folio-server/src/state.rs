//! Shared server state.

use anyhow::Context;
use core_gallery::GalleryService;
use std::sync::Arc;
use std::time::Duration;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Gallery pipeline front door.
    pub gallery: Arc<GalleryService>,

    /// Plain client for the relay endpoints. The relay talks to arbitrary
    /// asset hosts, not the hosting API, so it bypasses the connector.
    pub relay: reqwest::Client,
}

impl AppState {
    pub fn new(gallery: Arc<GalleryService>) -> anyhow::Result<Self> {
        let relay = reqwest::Client::builder()
            .user_agent("folio-site-core/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build relay HTTP client")?;

        Ok(Self { gallery, relay })
    }
}
