//! GitHub API connector implementation
//!
//! Implements the [`RepositoryHost`] trait against the GitHub REST API v3 and
//! the raw-content CDN.

use async_trait::async_trait;
use core_http::{HttpClient, HttpRequest, HttpResponse};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::{GitHubError, Result};
use crate::host::{Profile, RepoId, RepositoryHost, RepositoryMetadata, SocialAccount};
use crate::types::{RepoListEntry, RepoResponse, SocialAccountEntry, UserResponse};

/// GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Raw-content CDN base URL
pub const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";

/// Branch assumed when repository metadata is unavailable
pub const FALLBACK_BRANCH: &str = "main";

/// Media type for REST API requests
const API_ACCEPT: &str = "application/vnd.github.v3+json";

/// Timeout for API requests
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub API connector
///
/// One outbound request per operation, no retries; failed fetches degrade in
/// the caller's fallback chain instead.
///
/// # Example
///
/// ```ignore
/// use provider_github::{GitHubConnector, RepositoryHost};
///
/// let connector = GitHubConnector::new(http_client, Some(token));
/// let repos = connector.list_repositories("acme", 10).await?;
/// ```
pub struct GitHubConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// Bearer credential; `None` means unauthenticated (lower rate limits)
    credential: Option<String>,

    api_base: String,
    raw_base: String,
}

impl GitHubConnector {
    /// Create a connector against the public GitHub endpoints
    pub fn new(http_client: Arc<dyn HttpClient>, credential: Option<String>) -> Self {
        Self::with_endpoints(
            http_client,
            credential,
            GITHUB_API_BASE.to_string(),
            RAW_CONTENT_BASE.to_string(),
        )
    }

    /// Create a connector with custom endpoints (used by tests)
    pub fn with_endpoints(
        http_client: Arc<dyn HttpClient>,
        credential: Option<String>,
        api_base: String,
        raw_base: String,
    ) -> Self {
        Self {
            http_client,
            credential,
            api_base,
            raw_base,
        }
    }

    /// Build an API request with the standard headers
    fn api_request(&self, url: String) -> HttpRequest {
        let mut request = HttpRequest::get(url)
            .header("Accept", API_ACCEPT)
            .timeout(REQUEST_TIMEOUT);

        if let Some(credential) = &self.credential {
            request = request.bearer_token(credential);
        }

        request
    }

    /// Map a non-success response to an [`GitHubError::ApiError`]
    ///
    /// The rate-limit budget is appended when the API reports it, so the
    /// logged cause shows exhaustion at a glance.
    fn api_error(response: &HttpResponse) -> GitHubError {
        let mut message = String::from_utf8_lossy(&response.body).into_owned();
        if let Some(remaining) = response.headers.get("x-ratelimit-remaining") {
            message = format!("{} (rate limit remaining: {})", message.trim(), remaining);
        }
        GitHubError::ApiError {
            status: response.status,
            message,
        }
    }
}

#[async_trait]
impl RepositoryHost for GitHubConnector {
    #[instrument(skip(self), fields(account = %account))]
    async fn list_repositories(&self, account: &str, limit: u32) -> Result<Vec<RepoId>> {
        let url = format!(
            "{}/users/{}/repos?sort=created&direction=desc&per_page={}",
            self.api_base,
            urlencoding::encode(account),
            limit
        );

        let response = self.http_client.execute(self.api_request(url)).await?;

        if !response.is_success() {
            return Err(Self::api_error(&response));
        }

        let entries: Vec<RepoListEntry> = response
            .json()
            .map_err(|e| GitHubError::ParseError(format!("repository listing: {}", e)))?;

        let repos: Vec<RepoId> = entries
            .iter()
            .filter_map(|entry| {
                let id = RepoId::parse(&entry.full_name);
                if id.is_none() {
                    warn!(full_name = %entry.full_name, "Skipping malformed repository name");
                }
                id
            })
            .collect();

        info!("Listed {} repositories for {}", repos.len(), account);

        Ok(repos)
    }

    #[instrument(skip(self), fields(repo = %id))]
    async fn fetch_repository(&self, id: &RepoId) -> Result<RepositoryMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base, id.owner, id.name);

        let response = self.http_client.execute(self.api_request(url)).await?;

        if !response.is_success() {
            return Err(Self::api_error(&response));
        }

        let repo: RepoResponse = response
            .json()
            .map_err(|e| GitHubError::ParseError(format!("repository metadata: {}", e)))?;

        Ok(RepositoryMetadata {
            default_branch: repo
                .default_branch
                .unwrap_or_else(|| FALLBACK_BRANCH.to_string()),
            description: repo.description.filter(|d| !d.trim().is_empty()),
        })
    }

    #[instrument(skip(self), fields(repo = %id, branch = %branch))]
    async fn fetch_readme(&self, id: &RepoId, branch: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/{}/{}/{}/README.md",
            self.raw_base, id.owner, id.name, branch
        );

        // Raw content is public; no auth header needed and the CDN caches it.
        let request = HttpRequest::get(url).timeout(REQUEST_TIMEOUT);
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            debug!(status = response.status, "README not available");
            return Ok(None);
        }

        let text = response
            .text()
            .map_err(|e| GitHubError::ParseError(format!("README body: {}", e)))?;

        Ok(Some(text))
    }

    #[instrument(skip(self))]
    async fn fetch_profile(&self) -> Result<Option<Profile>> {
        if self.credential.is_none() {
            debug!("No credential configured, skipping profile fetch");
            return Ok(None);
        }

        let url = format!("{}/user", self.api_base);
        let response = self.http_client.execute(self.api_request(url)).await?;

        if !response.is_success() {
            warn!(status = response.status, "Profile fetch failed");
            return Ok(None);
        }

        let user: UserResponse = response
            .json()
            .map_err(|e| GitHubError::ParseError(format!("user profile: {}", e)))?;

        // Social accounts are best-effort; a failed fetch leaves the list empty.
        let url = format!(
            "{}/users/{}/social_accounts",
            self.api_base,
            urlencoding::encode(&user.login)
        );
        let social_accounts = match self.http_client.execute(self.api_request(url)).await {
            Ok(response) if response.is_success() => response
                .json::<Vec<SocialAccountEntry>>()
                .unwrap_or_default()
                .into_iter()
                .map(|entry| SocialAccount {
                    provider: entry.provider,
                    url: entry.url,
                })
                .collect(),
            Ok(response) => {
                debug!(status = response.status, "Social accounts not available");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Social accounts fetch failed");
                Vec::new()
            }
        };

        Ok(Some(Profile {
            login: user.login,
            email: user.email.filter(|e| !e.is_empty()),
            blog: user.blog.filter(|b| !b.is_empty()),
            social_accounts,
        }))
    }
}
