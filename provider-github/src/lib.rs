//! # GitHub Provider
//!
//! Implements the [`RepositoryHost`] trait for the GitHub REST API v3 and the
//! raw-content CDN.
//!
//! ## Overview
//!
//! This crate provides:
//! - Repository listing ordered by creation time, newest first
//! - Single-repository metadata (default branch, short description)
//! - README retrieval from the raw-content host
//! - Profile and social-account aggregation for the socials page
//!
//! All requests go through the `core-http` [`HttpClient`](core_http::HttpClient)
//! seam so tests can run against a mock.

pub mod connector;
pub mod error;
pub mod host;
pub mod types;

pub use connector::{GitHubConnector, FALLBACK_BRANCH, GITHUB_API_BASE, RAW_CONTENT_BASE};
pub use error::{GitHubError, Result};
pub use host::{Profile, RepoId, RepositoryHost, RepositoryMetadata, SocialAccount};
