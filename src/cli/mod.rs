//! CLI module
//!
//! Command-line front end that builds one page set and prints it.
//!
//! # Formats
//!
//! - `html` - `<ul class="paginator">` fragment
//! - `json` / `pretty` - structured list under a `pages` key
//! - `yaml` - same structure as YAML
//! - `template` - each link rendered through `--template`

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::Runner;
