//! HTML fragment renderer
//!
//! Produces the `<ul>` list consumed by existing page templates. Labels and
//! hrefs are written verbatim: escaping untrusted prefixes is up to the caller.

use crate::pagination::PageLink;
use std::fmt::{self, Write};

/// Class of the wrapping `<ul>` element
pub const DEFAULT_LIST_CLASS: &str = "paginator";

/// Renders page links as an HTML unordered list
///
/// Output layout, byte for byte:
///
/// ```text
/// <ul class="paginator">
/// \t<li class="first"><a href="/p/">⇤</a></li>
/// \t<li><a href="/p/page/2">2</a></li>
/// </ul>
/// ```
///
/// followed by a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
    list_class: Option<String>,
    current_class: Option<String>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            list_class: Some(DEFAULT_LIST_CLASS.to_string()),
            current_class: None,
        }
    }
}

impl HtmlRenderer {
    /// Create a renderer with the default classes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `<ul>` class; `None` renders a bare `<ul>`
    #[must_use]
    pub fn with_list_class(mut self, class: Option<&str>) -> Self {
        self.list_class = class.map(str::to_string);
        self
    }

    /// Replace the `actual` class on the current page item
    #[must_use]
    pub fn with_current_class(mut self, class: impl Into<String>) -> Self {
        self.current_class = Some(class.into());
        self
    }

    /// Render links into a new string
    pub fn render(&self, links: &[PageLink]) -> String {
        let mut html = String::new();
        self.render_to(links, &mut html)
            .expect("writing to a String cannot fail");
        html
    }

    /// Render links into any formatter sink
    pub fn render_to(&self, links: &[PageLink], out: &mut impl Write) -> fmt::Result {
        match &self.list_class {
            Some(class) => write!(out, "<ul class=\"{class}\">")?,
            None => out.write_str("<ul>")?,
        }

        for link in links {
            out.write_str("\n\t<li")?;
            if let Some(class) = self.class_for(link) {
                write!(out, " class=\"{class}\"")?;
            }
            write!(out, "><a href=\"{}\">{}</a></li>", link.href(), link.label())?;
        }

        out.write_str("\n</ul>\n")
    }

    fn class_for<'a>(&'a self, link: &'a PageLink) -> Option<&'a str> {
        match &self.current_class {
            Some(class) if link.is_current() => Some(class.as_str()),
            _ => link.class(),
        }
    }
}
