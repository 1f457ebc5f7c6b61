//! Repository host abstraction and domain types.
//!
//! The [`RepositoryHost`] trait is the seam between the gallery pipeline and
//! the hosting platform. The pipeline never talks to GitHub directly; it is
//! written against this trait so tests can substitute a mock host.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// Owner/name pair uniquely addressing a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` string as returned by the listing endpoint.
    ///
    /// Returns `None` for strings without exactly one separator segment each
    /// side of the slash.
    pub fn parse(full_name: &str) -> Option<Self> {
        let (owner, name) = full_name.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Request-scoped repository metadata.
#[derive(Debug, Clone)]
pub struct RepositoryMetadata {
    /// Branch the platform treats as canonical.
    pub default_branch: String,
    /// One-line description, absent when unset or blank.
    pub description: Option<String>,
}

/// A linked social account on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialAccount {
    pub provider: String,
    pub url: String,
}

/// Aggregated account profile for the socials page.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub login: String,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub social_accounts: Vec<SocialAccount>,
}

/// Async repository hosting platform abstraction.
///
/// Every method performs single-shot, stateless request/response work; no
/// state is retained across calls and no retries happen behind this trait.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// List an account's repositories, most recently created first.
    ///
    /// Returns at most `limit` identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status
    /// (including rate-limit exhaustion). Callers treat this as an empty,
    /// displayable result rather than a fatal condition.
    async fn list_repositories(&self, account: &str, limit: u32) -> Result<Vec<RepoId>>;

    /// Fetch metadata for a single repository.
    async fn fetch_repository(&self, id: &RepoId) -> Result<RepositoryMetadata>;

    /// Fetch the raw README document at the given branch.
    ///
    /// Returns `Ok(None)` when the document is absent (any non-success
    /// status); an `Err` means the fetch failed outright with no usable
    /// response.
    async fn fetch_readme(&self, id: &RepoId, branch: &str) -> Result<Option<String>>;

    /// Fetch the authenticated account's profile and social accounts.
    ///
    /// Returns `Ok(None)` when no credential is configured or the profile is
    /// unavailable; this path never surfaces an error to the caller.
    async fn fetch_profile(&self) -> Result<Option<Profile>>;
}
