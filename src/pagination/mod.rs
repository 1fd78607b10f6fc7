//! Pagination module
//!
//! Builds the list of page links (first, previous, numbered range, next,
//! last) for a known item count.
//!
//! # Overview
//!
//! A [`PageSet`] is configured through permissive setters, then built.
//! The built links are exposed read-only for structured consumers and can
//! be rendered straight to HTML.
//!
//! ```
//! use pagelinks::pagination::PageSet;
//!
//! let mut pages = PageSet::new(256)?;
//! pages.set_current_page(7).set_link_prefix("/admin/posts/");
//! pages.build();
//!
//! assert_eq!(pages.page_count(), 26);
//! assert_eq!(pages.links()[0].href(), "/admin/posts/");
//! # Ok::<(), pagelinks::Error>(())
//! ```

mod page_set;
mod types;

pub use page_set::PageSet;
pub use types::PageLink;
