//! # Repository Enricher
//!
//! Turns one repository identifier into a best-effort display record by
//! fetching its metadata and README and running the extraction rules as an
//! ordered fallback chain.
//!
//! ## Fallback chain
//!
//! 1. Metadata fetch. Failure is non-fatal; the conventional branch is
//!    assumed and the description left blank.
//! 2. README fetch at the resolved branch. When the document is absent the
//!    record is built from metadata alone: the social-card image stands in
//!    when a description exists, otherwise the record carries no image and
//!    the assembler drops it.
//! 3. Title, image, description, and year extraction over the document text.
//!
//! `None` is returned only when neither fetch produced a usable response;
//! any partial success yields a record.

use chrono::Datelike;
use provider_github::{RepoId, RepositoryHost, FALLBACK_BRANCH, RAW_CONTENT_BASE};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::readme::{resolve_asset_url, ReadmeExtractor};

/// Social-card renderer used when a repository has a description but no
/// README to scrape an image from.
pub const SOCIAL_CARD_BASE: &str = "https://opengraph.githubassets.com/1";

/// Best-effort display record for one repository.
///
/// `title` is never empty; it falls back to the bare repository name.
/// `image_url`, when present, is an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRepository {
    pub id: RepoId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub year: String,
}

/// Enriches repository identifiers into display records.
pub struct RepoEnricher {
    host: Arc<dyn RepositoryHost>,
    extractor: ReadmeExtractor,
}

impl RepoEnricher {
    pub fn new(host: Arc<dyn RepositoryHost>) -> Self {
        Self {
            host,
            extractor: ReadmeExtractor::new(),
        }
    }

    fn social_card_url(id: &RepoId) -> String {
        format!("{}/{}/{}", SOCIAL_CARD_BASE, id.owner, id.name)
    }

    fn current_year() -> String {
        chrono::Utc::now().year().to_string()
    }

    /// Enrich one repository.
    ///
    /// Invocations for distinct identifiers share no state and may run
    /// concurrently.
    #[instrument(skip(self), fields(repo = %id))]
    pub async fn enrich(&self, id: &RepoId) -> Option<EnrichedRepository> {
        let metadata = match self.host.fetch_repository(id).await {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!(error = %e, "Metadata fetch failed, assuming conventional branch");
                None
            }
        };

        let default_branch = metadata
            .as_ref()
            .map(|m| m.default_branch.clone())
            .unwrap_or_else(|| FALLBACK_BRANCH.to_string());
        let meta_description = metadata.as_ref().and_then(|m| m.description.clone());

        let readme = match self.host.fetch_readme(id, &default_branch).await {
            Ok(doc) => doc,
            Err(e) => {
                if metadata.is_none() {
                    warn!(error = %e, "Neither metadata nor README reachable");
                    return None;
                }
                warn!(error = %e, "README fetch failed");
                None
            }
        };

        let Some(text) = readme else {
            debug!("README absent, building metadata-only record");
            let image_url = meta_description
                .is_some()
                .then(|| Self::social_card_url(id));
            return Some(EnrichedRepository {
                id: id.clone(),
                title: id.name.clone(),
                description: meta_description.unwrap_or_default(),
                image_url,
                year: Self::current_year(),
            });
        };

        let title = self
            .extractor
            .extract_title(&text)
            .unwrap_or_else(|| id.name.clone());

        let image_url = self
            .extractor
            .extract_image(&text)
            .map(|path| resolve_asset_url(RAW_CONTENT_BASE, id, &default_branch, &path));

        let description = meta_description
            .or_else(|| self.extractor.extract_section_description(&text))
            .or_else(|| self.extractor.extract_tagline(&text))
            .or_else(|| self.extractor.extract_first_paragraph(&text))
            .unwrap_or_default();

        let year = self
            .extractor
            .extract_year(&text)
            .unwrap_or_else(Self::current_year);

        Some(EnrichedRepository {
            id: id.clone(),
            title,
            description,
            image_url,
            year,
        })
    }
}
