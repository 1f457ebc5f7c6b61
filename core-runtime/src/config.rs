//! # Gallery Configuration
//!
//! Provides configuration management for the portfolio gallery pipeline.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`GalleryConfig`] instance holding the account handle, the optional API
//! credential, and the pipeline tuning knobs. It enforces fail-fast
//! validation so a misconfigured pipeline never starts.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::GalleryConfig;
//!
//! let config = GalleryConfig::builder()
//!     .account_handle("acme")
//!     .repository_limit(12)
//!     .height_range(400, 600)
//!     .build()
//!     .expect("Failed to build config");
//!
//! assert_eq!(config.repository_limit, 12);
//! ```
//!
//! ## Credential resolution
//!
//! The API credential is optional. [`GalleryConfigBuilder::credential_from_env`]
//! reads it from the `GITHUB_TOKEN` environment variable; when the variable is
//! unset the GitHub-sourced features silently degrade to empty collections
//! rather than failing.

use crate::error::{Error, Result};

/// Environment variable holding the hosting-API bearer credential.
pub const CREDENTIAL_ENV_VAR: &str = "GITHUB_TOKEN";

/// Default number of repositories fetched for the gallery.
pub const DEFAULT_REPOSITORY_LIMIT: u32 = 10;

/// Default inclusive bounds for the masonry layout height hint.
pub const DEFAULT_HEIGHT_RANGE: (u32, u32) = (350, 550);

/// Configuration for the gallery pipeline.
///
/// Use [`GalleryConfigBuilder`] to construct instances.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Account handle whose repositories feed the gallery.
    pub account_handle: String,

    /// Bearer credential for the hosting API. Optional; without it the
    /// GitHub-sourced feature set returns empty collections.
    pub credential: Option<String>,

    /// Maximum number of repositories to list, newest first.
    pub repository_limit: u32,

    /// Inclusive bounds for the randomly assigned gallery item height.
    pub height_range: (u32, u32),
}

impl GalleryConfig {
    /// Create a builder for constructing a configuration.
    pub fn builder() -> GalleryConfigBuilder {
        GalleryConfigBuilder::default()
    }

    /// Whether a credential is available for authenticated API calls.
    pub fn has_credential(&self) -> bool {
        self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Builder for [`GalleryConfig`] with fail-fast validation.
#[derive(Debug, Default)]
pub struct GalleryConfigBuilder {
    account_handle: Option<String>,
    credential: Option<String>,
    repository_limit: Option<u32>,
    height_range: Option<(u32, u32)>,
}

impl GalleryConfigBuilder {
    /// Set the account handle (required).
    pub fn account_handle(mut self, handle: impl Into<String>) -> Self {
        self.account_handle = Some(handle.into());
        self
    }

    /// Set the API credential explicitly.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Read the API credential from the process environment.
    ///
    /// Absence of the variable is not an error; the pipeline degrades to
    /// empty results instead.
    pub fn credential_from_env(mut self) -> Self {
        self.credential = std::env::var(CREDENTIAL_ENV_VAR)
            .ok()
            .filter(|v| !v.is_empty());
        self
    }

    /// Set the repository listing limit (default 10).
    pub fn repository_limit(mut self, limit: u32) -> Self {
        self.repository_limit = Some(limit);
        self
    }

    /// Set the inclusive height bounds for gallery items (default 350-550).
    pub fn height_range(mut self, min: u32, max: u32) -> Self {
        self.height_range = Some((min, max));
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the account handle is missing or empty,
    /// the repository limit is zero, or the height range is inverted.
    pub fn build(self) -> Result<GalleryConfig> {
        let account_handle = self
            .account_handle
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| Error::Config("account_handle is required".to_string()))?;

        let repository_limit = self.repository_limit.unwrap_or(DEFAULT_REPOSITORY_LIMIT);
        if repository_limit == 0 {
            return Err(Error::Config(
                "repository_limit must be a positive integer".to_string(),
            ));
        }

        let height_range = self.height_range.unwrap_or(DEFAULT_HEIGHT_RANGE);
        if height_range.0 > height_range.1 {
            return Err(Error::Config(format!(
                "height_range minimum {} exceeds maximum {}",
                height_range.0, height_range.1
            )));
        }

        Ok(GalleryConfig {
            account_handle,
            credential: self.credential,
            repository_limit,
            height_range,
        })
    }
}
