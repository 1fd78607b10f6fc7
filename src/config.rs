//! Pagination configuration
//!
//! `PaginationConfig` holds every input of the link builder. It can be
//! built in code through the permissive setters, or loaded from a YAML or
//! JSON file, in which case values are validated strictly.

use crate::error::{Error, Result, ResultExt};
use crate::types::{BoundaryMode, LabelStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Items per page when none is configured
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Numbered pages shown on each side of the current page
pub const DEFAULT_NEIGHBOR_RANGE: u64 = 5;

/// Current page when none is configured
pub const DEFAULT_CURRENT_PAGE: u64 = 1;

/// Separator between the link prefix and the page number
pub const DEFAULT_PATH_SEGMENT: &str = "page/";

// ============================================================================
// Pagination Config
// ============================================================================

/// Inputs of a page set build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Total number of items being paginated
    #[serde(default)]
    pub total_items: u64,

    /// Maximum items per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Pages shown before and after the current one
    #[serde(default = "default_neighbor_range")]
    pub neighbor_range: u64,

    /// Page being displayed (1-based)
    #[serde(default = "default_current_page")]
    pub current_page: u64,

    /// Prepended to every href; page 1 links to the bare prefix
    #[serde(default)]
    pub link_prefix: String,

    /// Inserted between the prefix and the page number
    #[serde(default = "default_path_segment")]
    pub path_segment: String,

    /// Upper bound handling of the numbered range
    #[serde(default)]
    pub boundary: BoundaryMode,

    /// Glyphs used for first/previous/next/last
    #[serde(default)]
    pub label_style: LabelStyle,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_neighbor_range() -> u64 {
    DEFAULT_NEIGHBOR_RANGE
}

fn default_current_page() -> u64 {
    DEFAULT_CURRENT_PAGE
}

fn default_path_segment() -> String {
    DEFAULT_PATH_SEGMENT.to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            page_size: DEFAULT_PAGE_SIZE,
            neighbor_range: DEFAULT_NEIGHBOR_RANGE,
            current_page: DEFAULT_CURRENT_PAGE,
            link_prefix: String::new(),
            path_segment: default_path_segment(),
            boundary: BoundaryMode::default(),
            label_style: LabelStyle::default(),
        }
    }
}

/// Convert a caller-supplied item total, rejecting negatives
pub fn checked_total(total_items: i64) -> Result<u64> {
    u64::try_from(total_items).map_err(|_| {
        Error::invalid_input(format!(
            "total items cannot be negative, got {total_items}"
        ))
    })
}

/// Accepts only strictly positive values
fn positive(n: i64) -> Option<u64> {
    u64::try_from(n).ok().filter(|v| *v > 0)
}

impl PaginationConfig {
    /// Create a config for `total_items` with every other field at its default
    pub fn new(total_items: u64) -> Self {
        Self {
            total_items,
            ..Default::default()
        }
    }

    /// Set the current page; non-positive values are ignored
    pub fn set_current_page(&mut self, n: i64) -> &mut Self {
        match positive(n) {
            Some(page) => self.current_page = page,
            None => tracing::debug!("Ignoring non-positive current page: {}", n),
        }
        self
    }

    /// Set the page size; non-positive values are ignored
    pub fn set_page_size(&mut self, n: i64) -> &mut Self {
        match positive(n) {
            Some(size) => self.page_size = size,
            None => tracing::debug!("Ignoring non-positive page size: {}", n),
        }
        self
    }

    /// Set the neighbor range; non-positive values are ignored
    pub fn set_neighbor_range(&mut self, n: i64) -> &mut Self {
        match positive(n) {
            Some(range) => self.neighbor_range = range,
            None => tracing::debug!("Ignoring non-positive neighbor range: {}", n),
        }
        self
    }

    /// Set the string prepended to every link
    pub fn set_link_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.link_prefix = prefix.into();
        self
    }

    /// Set the separator placed between the prefix and page numbers
    pub fn set_path_segment(&mut self, segment: impl Into<String>) -> &mut Self {
        self.path_segment = segment.into();
        self
    }

    /// Set the numbered range boundary mode
    pub fn set_boundary(&mut self, boundary: BoundaryMode) -> &mut Self {
        self.boundary = boundary;
        self
    }

    /// Set the navigation glyph style
    pub fn set_label_style(&mut self, style: LabelStyle) -> &mut Self {
        self.label_style = style;
        self
    }

    /// Number of pages needed to hold `total_items`
    ///
    /// Integer ceiling division; a zero page size (only reachable by
    /// assigning the public field directly) yields zero pages.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        let mut count = self.total_items / self.page_size;
        if self.total_items % self.page_size > 0 {
            count += 1;
        }
        count
    }

    /// Reject zero values that the setters would have ignored
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("page_size", self.page_size),
            ("neighbor_range", self.neighbor_range),
            ("current_page", self.current_page),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(Error::invalid_value(field, "must be greater than zero"));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        read => read.with_context(|| format!("Failed to read config file '{}'", path.display()))?,
    };

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_config_from_json(&content)
    } else {
        load_config_from_str(&content)
    }
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PaginationConfig> {
    let config: PaginationConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Load a config from a JSON string
pub fn load_config_from_json(json: &str) -> Result<PaginationConfig> {
    let config: PaginationConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
