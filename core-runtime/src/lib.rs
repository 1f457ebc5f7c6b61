//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the portfolio site core:
//! - Configuration management
//! - Logging and tracing infrastructure
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the other crates depend on. It
//! establishes the configuration and logging conventions used throughout the
//! system.

pub mod config;
pub mod error;
pub mod logging;

pub use config::GalleryConfig;
pub use error::{Error, Result};
