//! Output module
//!
//! Renders built page links for downstream consumers.
//!
//! # Overview
//!
//! This module provides:
//! - An HTML `<ul>` fragment renderer with configurable classes
//! - Structured JSON and YAML output under a root `pages` key

mod html;
mod structured;

pub use html::{HtmlRenderer, DEFAULT_LIST_CLASS};
pub use structured::{to_json, to_json_pretty, to_yaml};
