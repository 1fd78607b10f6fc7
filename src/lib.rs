//! # pagelinks
//!
//! Builds the list of pagination links (first, previous, a numbered range
//! around the current page, next, last) for a known item count, and renders
//! it as structured data or as an HTML fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelinks::{PageSet, Result};
//!
//! fn main() -> Result<()> {
//!     let mut pages = PageSet::new(256)?;
//!     pages
//!         .set_current_page(7)
//!         .set_page_size(10)
//!         .set_neighbor_range(5)
//!         .set_link_prefix("/admin/posts/");
//!     pages.build();
//!
//!     // Structured: {"pages": [{"label": "⇤", "href": "/admin/posts/", ...}, ...]}
//!     let json = pagelinks::output::to_json(&pages)?;
//!     assert!(json.starts_with(r#"{"pages":[{"label":"⇤","href":"/admin/posts/""#));
//!
//!     // HTML: <ul class="paginator"> ... </ul>
//!     assert!(pages.to_html().contains(r#"<li class="actual"><a href="/admin/posts/page/7">7</a></li>"#));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────────┐    ┌──────────────────┐
//! │    Config    │ →  │  PageSet::build()     │ →  │  Output          │
//! │ setters/YAML │    │  first, previous,     │    │  links() / JSON  │
//! │              │    │  range, next, last    │    │  HTML / template │
//! └──────────────┘    └───────────────────────┘    └──────────────────┘
//! ```
//!
//! A `PageSet` is a plain value: mutate, build, then read. It does no
//! locking of its own.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums
pub mod types;

/// Pagination configuration and loading
pub mod config;

/// Page link generation
pub mod pagination;

/// HTML and structured renderers
pub mod output;

/// Per-link template interpolation
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, PaginationConfig};
pub use error::{Error, Result};
pub use pagination::{PageLink, PageSet};
pub use types::{BoundaryMode, LabelStyle, LinkKind};
