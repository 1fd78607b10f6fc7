//! Common types used throughout pagelinks
//!
//! Small enums shared by the config, the link builder and the renderers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Link Kind
// ============================================================================

/// Role of a link within a built page set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Jump to page 1
    First,
    /// One page back
    Previous,
    /// A numbered page inside the neighbor range
    Page,
    /// One page forward
    Next,
    /// Jump to the final page
    Last,
}

impl LinkKind {
    /// Serialized name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::First => "first",
            LinkKind::Previous => "previous",
            LinkKind::Page => "page",
            LinkKind::Next => "next",
            LinkKind::Last => "last",
        }
    }

    /// CSS class carried by navigation links; numbered pages have none
    pub fn class(self) -> Option<&'static str> {
        match self {
            LinkKind::First => Some("first"),
            LinkKind::Previous => Some("previous"),
            LinkKind::Next => Some("next"),
            LinkKind::Last => Some("last"),
            LinkKind::Page => None,
        }
    }
}

// ============================================================================
// Boundary Mode
// ============================================================================

/// Whether the numbered range includes `current + range`
///
/// The lower bound `current - range` is always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// `[current - range, current + range]`
    #[default]
    Inclusive,
    /// `[current - range, current + range)`
    Exclusive,
}

// ============================================================================
// Label Style
// ============================================================================

/// Glyph set used for the navigation link labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// ⇤ ← → ⇥
    #[default]
    Arrows,
    /// « ‹ › »
    Guillemets,
}

impl LabelStyle {
    /// Label for a navigation link, `None` for numbered pages
    pub fn glyph(self, kind: LinkKind) -> Option<&'static str> {
        let glyphs = match self {
            LabelStyle::Arrows => ["⇤", "←", "→", "⇥"],
            LabelStyle::Guillemets => ["«", "‹", "›", "»"],
        };
        match kind {
            LinkKind::First => Some(glyphs[0]),
            LinkKind::Previous => Some(glyphs[1]),
            LinkKind::Next => Some(glyphs[2]),
            LinkKind::Last => Some(glyphs[3]),
            LinkKind::Page => None,
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
