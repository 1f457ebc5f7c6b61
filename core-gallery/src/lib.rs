//! # Gallery Pipeline
//!
//! The repository-metadata extraction pipeline behind the projects gallery:
//!
//! ```text
//! ┌───────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ GalleryService│────>│ RepoEnricher │────>│   assemble    │
//! │  (lister +    │  ×N │  (fallback   │     │ (filter + lay-│
//! │   fan-out)    │     │   chain)     │     │  out heights) │
//! └───────────────┘     └──────────────┘     └───────────────┘
//! ```
//!
//! The lister retrieves a bounded set of repository identifiers, the enricher
//! runs once per identifier (concurrently, joined after all settle) and the
//! assembler maps surviving records into the display shape the masonry layout
//! consumes.
//!
//! Every failure in this crate degrades to a smaller or empty result; nothing
//! here is fatal. The README scraping rules live in [`readme`] as named pure
//! functions so each precedence step is testable in isolation.

pub mod assembler;
pub mod enricher;
pub mod readme;
pub mod service;

pub use assembler::{assemble, GalleryItem};
pub use enricher::{EnrichedRepository, RepoEnricher};
pub use readme::ReadmeExtractor;
pub use service::GalleryService;
