//! Page link type
//!
//! A single entry of a built page set.

use crate::types::LinkKind;
use serde::Serialize;

/// CSS class of the numbered link for the current page
pub const CURRENT_CLASS: &str = "actual";

/// One navigable entry with a display label and a target href
///
/// Serializes as `{"label", "href", "kind", "current", "class"}`, with
/// `class` omitted when the link has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    label: String,
    href: String,
    kind: LinkKind,
    current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<&'static str>,
}

impl PageLink {
    /// Create a first/previous/next/last link
    pub fn navigation(kind: LinkKind, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
            current: false,
            class: kind.class(),
        }
    }

    /// Create a numbered link
    pub fn page(number: u64, href: impl Into<String>, current: bool) -> Self {
        Self {
            label: number.to_string(),
            href: href.into(),
            kind: LinkKind::Page,
            current,
            class: current.then_some(CURRENT_CLASS),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    /// Whether this is the numbered link of the current page
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// `first`/`previous`/`next`/`last` for navigation, `actual` for the current page
    pub fn class(&self) -> Option<&'static str> {
        self.class
    }
}
