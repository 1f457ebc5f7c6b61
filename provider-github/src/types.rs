//! GitHub API response types
//!
//! Data structures for deserializing GitHub REST API v3 responses.

use serde::Deserialize;

/// Entry in the user-repositories listing response
///
/// See: https://docs.github.com/en/rest/repos/repos#list-repositories-for-a-user
#[derive(Debug, Clone, Deserialize)]
pub struct RepoListEntry {
    /// `owner/name` pair
    pub full_name: String,
}

/// Single-repository response
///
/// See: https://docs.github.com/en/rest/repos/repos#get-a-repository
#[derive(Debug, Clone, Deserialize)]
pub struct RepoResponse {
    /// Canonical branch; absent on some mirror repositories
    #[serde(default)]
    pub default_branch: Option<String>,

    /// One-line description
    #[serde(default)]
    pub description: Option<String>,
}

/// Authenticated-user response
///
/// See: https://docs.github.com/en/rest/users/users#get-the-authenticated-user
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub login: String,

    #[serde(default)]
    pub email: Option<String>,

    /// Personal website; the API returns an empty string when unset
    #[serde(default)]
    pub blog: Option<String>,
}

/// Social-account entry
///
/// See: https://docs.github.com/en/rest/users/social-accounts
#[derive(Debug, Clone, Deserialize)]
pub struct SocialAccountEntry {
    pub provider: String,
    pub url: String,
}
