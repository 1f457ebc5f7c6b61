//! # HTTP Client Abstraction
//!
//! Provides the async HTTP seam the connectors are written against, plus the
//! reqwest-backed implementation used by the binaries. Keeping the trait
//! separate from the implementation lets tests substitute a mock client and
//! exercise the pipeline without the network.

pub mod client;
pub mod error;
pub mod reqwest_client;

pub use client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use error::{HttpError, Result};
pub use reqwest_client::ReqwestHttpClient;
