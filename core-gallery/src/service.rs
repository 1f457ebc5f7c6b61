//! # Gallery Service
//!
//! Front door for the pipeline. Lists the account's newest repositories,
//! fans the enricher out over them, and assembles the surviving records
//! into gallery items.
//!
//! The service never fails outward: a missing credential, an unreachable
//! listing endpoint, or a fleet of broken repositories all degrade to an
//! empty (or smaller) collection so the caller can always render.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_runtime::GalleryConfig;
use provider_github::{Profile, RepositoryHost};

use crate::assembler::{assemble, GalleryItem};
use crate::enricher::RepoEnricher;

/// Lists, enriches and assembles the projects gallery.
pub struct GalleryService {
    host: Arc<dyn RepositoryHost>,
    enricher: RepoEnricher,
    config: GalleryConfig,
}

impl GalleryService {
    pub fn new(host: Arc<dyn RepositoryHost>, config: GalleryConfig) -> Self {
        let enricher = RepoEnricher::new(Arc::clone(&host));
        Self {
            host,
            enricher,
            config,
        }
    }

    /// Fetch and assemble the account's newest repositories.
    ///
    /// Enrichment runs concurrently over the listed identifiers and joins
    /// after every repository settles, so one slow or broken repository
    /// never hides the others.
    #[instrument(skip(self), fields(account = %self.config.account_handle))]
    pub async fn latest_projects(&self) -> Vec<GalleryItem> {
        if !self.config.has_credential() {
            warn!("No API credential configured, serving empty gallery");
            return Vec::new();
        }

        let repos = match self
            .host
            .list_repositories(&self.config.account_handle, self.config.repository_limit)
            .await
        {
            Ok(repos) => repos,
            Err(e) => {
                warn!(error = %e, "Repository listing failed, serving empty gallery");
                return Vec::new();
            }
        };

        let enriched = join_all(repos.iter().map(|id| self.enricher.enrich(id))).await;
        let records: Vec<_> = enriched.into_iter().flatten().collect();

        info!(
            listed = repos.len(),
            enriched = records.len(),
            "Gallery pipeline complete"
        );

        assemble(records, self.config.height_range)
    }

    /// Fetch the authenticated profile with its social accounts.
    ///
    /// Returns `None` when no credential is configured or the host is
    /// unreachable.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Option<Profile> {
        match self.host.fetch_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "Profile fetch failed");
                None
            }
        }
    }
}
