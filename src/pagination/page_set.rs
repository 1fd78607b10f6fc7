//! Page set builder
//!
//! Owns the configuration and the links produced by the latest build.

use super::types::PageLink;
use crate::config::{checked_total, PaginationConfig};
use crate::error::Result;
use crate::output::HtmlRenderer;
use crate::types::{BoundaryMode, LabelStyle, LinkKind};
use serde::Serialize;
use std::fmt;

/// Pagination links for a fixed item count
///
/// Mutators only change the configuration; [`PageSet::build`] must be
/// called again before the new settings show up in [`PageSet::links`].
///
/// Not synchronized: share behind a lock if several callers mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSet {
    #[serde(skip)]
    config: PaginationConfig,
    #[serde(rename = "pages")]
    links: Vec<PageLink>,
}

impl PageSet {
    /// Create an unbuilt page set for `total_items`
    ///
    /// Negative totals are rejected with [`crate::Error::InvalidInput`].
    pub fn new(total_items: i64) -> Result<Self> {
        Ok(Self {
            config: PaginationConfig::new(checked_total(total_items)?),
            links: Vec::new(),
        })
    }

    /// Create an unbuilt page set from a full configuration
    pub fn with_config(config: PaginationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            links: Vec::new(),
        })
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Set the current page; non-positive values are ignored
    pub fn set_current_page(&mut self, n: i64) -> &mut Self {
        self.config.set_current_page(n);
        self
    }

    /// Set the page size; non-positive values are ignored
    pub fn set_page_size(&mut self, n: i64) -> &mut Self {
        self.config.set_page_size(n);
        self
    }

    /// Set the neighbor range; non-positive values are ignored
    pub fn set_neighbor_range(&mut self, n: i64) -> &mut Self {
        self.config.set_neighbor_range(n);
        self
    }

    /// Set the string prepended to every href
    pub fn set_link_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.config.set_link_prefix(prefix);
        self
    }

    /// Set the separator between the prefix and page numbers
    pub fn set_path_segment(&mut self, segment: impl Into<String>) -> &mut Self {
        self.config.set_path_segment(segment);
        self
    }

    pub fn set_boundary(&mut self, boundary: BoundaryMode) -> &mut Self {
        self.config.set_boundary(boundary);
        self
    }

    pub fn set_label_style(&mut self, style: LabelStyle) -> &mut Self {
        self.config.set_label_style(style);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Recompute the links from the current configuration
    ///
    /// Order: first and previous (when past page 1), the numbered range
    /// clipped to `[1, page_count]`, then next and last (when before the
    /// final page). Links are never deduplicated, so with a wide range the
    /// numbered page 1 appears alongside "first".
    pub fn build(&mut self) -> &[PageLink] {
        self.links.clear();

        let page_count = self.config.page_count();
        let current = self.config.current_page;

        if current > 1 {
            self.push_navigation(LinkKind::First, 1);
            self.push_navigation(LinkKind::Previous, current - 1);
        }

        let range = self.config.neighbor_range;
        let start = current.saturating_sub(range).max(1);
        let upper = match self.config.boundary {
            BoundaryMode::Inclusive => current.saturating_add(range),
            BoundaryMode::Exclusive => current.saturating_add(range) - 1,
        };
        for page in start..=upper.min(page_count) {
            let href = self.href_for(page);
            self.links.push(PageLink::page(page, href, page == current));
        }

        if current < page_count {
            self.push_navigation(LinkKind::Next, current + 1);
            self.push_navigation(LinkKind::Last, page_count);
        }

        tracing::debug!(
            total_items = self.config.total_items,
            page_count,
            current_page = current,
            links = self.links.len(),
            "Built page links"
        );

        &self.links
    }

    fn push_navigation(&mut self, kind: LinkKind, target: u64) {
        let label = self.config.label_style.glyph(kind).unwrap_or_default();
        let href = self.href_for(target);
        self.links.push(PageLink::navigation(kind, label, href));
    }

    /// Page 1 links to the bare prefix, every other page to prefix + segment + number
    fn href_for(&self, page: u64) -> String {
        if page == 1 {
            self.config.link_prefix.clone()
        } else {
            format!(
                "{}{}{}",
                self.config.link_prefix, self.config.path_segment, page
            )
        }
    }

    // ========================================================================
    // Accessors and rendering
    // ========================================================================

    /// Links from the latest build, empty before the first build
    pub fn links(&self) -> &[PageLink] {
        &self.links
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn total_items(&self) -> u64 {
        self.config.total_items
    }

    pub fn current_page(&self) -> u64 {
        self.config.current_page
    }

    /// Pages needed for the configured total and page size
    pub fn page_count(&self) -> u64 {
        self.config.page_count()
    }

    /// Numbered link of the current page, if it falls inside `[1, page_count]`
    pub fn current_link(&self) -> Option<&PageLink> {
        self.links.iter().find(|link| link.is_current())
    }

    /// Render the built links as an HTML `<ul>` fragment with default classes
    pub fn to_html(&self) -> String {
        HtmlRenderer::default().render(&self.links)
    }
}

impl fmt::Display for PageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        HtmlRenderer::default().render_to(&self.links, f)
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a PageLink;
    type IntoIter = std::slice::Iter<'a, PageLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
