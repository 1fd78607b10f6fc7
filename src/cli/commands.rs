//! CLI arguments parsing

use crate::types::{BoundaryMode, LabelStyle, LogLevel};
use clap::Parser;
use std::path::PathBuf;

/// Print pagination links for an item count
#[derive(Parser, Debug)]
#[command(name = "pagelinks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Total number of items (overrides the config file)
    #[arg(short, long, allow_negative_numbers = true)]
    pub total: Option<i64>,

    /// Current page; non-positive values are ignored
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Items per page; non-positive values are ignored
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Pages shown on each side of the current one; non-positive values are ignored
    #[arg(short, long, allow_negative_numbers = true)]
    pub range: Option<i64>,

    /// String prepended to every link
    #[arg(long)]
    pub prefix: Option<String>,

    /// Separator between the prefix and the page number
    #[arg(long)]
    pub path: Option<String>,

    /// Whether `current + range` is part of the numbered pages (overrides the config file)
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryMode>,

    /// Navigation glyphs
    #[arg(long, value_enum)]
    pub labels: Option<LabelStyle>,

    /// Pagination config file (YAML, or JSON by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Per-link template for `--format template`, e.g. `<a href="{{ href }}">{{ label }}</a>`
    #[arg(long)]
    pub template: Option<String>,

    /// Opening fragment for `--format template`
    #[arg(long, default_value = "<ul class=\"pagination\">")]
    pub open: String,

    /// Closing fragment for `--format template`
    #[arg(long, default_value = "\n</ul>\n")]
    pub close: String,

    /// Log level written to stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Effective log level after applying `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        let quieter_than_debug = matches!(
            self.log_level,
            LogLevel::Info | LogLevel::Warn | LogLevel::Error
        );
        if self.verbose && quieter_than_debug {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML list fragment
    Html,
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// YAML
    Yaml,
    /// Links rendered through --template
    Template,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pagelinks", "--total", "256"]).unwrap();
        assert_eq!(cli.total, Some(256));
        assert_eq!(cli.page, None);
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.boundary, None);
        assert_eq!(cli.open, "<ul class=\"pagination\">");
    }

    #[test]
    fn test_parse_negative_numbers() {
        let cli = Cli::try_parse_from(["pagelinks", "-t", "-5", "-p", "-1"]).unwrap();
        assert_eq!(cli.total, Some(-5));
        assert_eq!(cli.page, Some(-1));
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "pagelinks",
            "--total",
            "256",
            "--page",
            "7",
            "--page-size",
            "10",
            "--range",
            "5",
            "--prefix",
            "/admin/posts/",
            "--path",
            "page/",
            "--boundary",
            "exclusive",
            "--labels",
            "guillemets",
            "--format",
            "pretty",
        ])
        .unwrap();
        assert_eq!(cli.page_size, Some(10));
        assert_eq!(cli.prefix.as_deref(), Some("/admin/posts/"));
        assert_eq!(cli.boundary, Some(BoundaryMode::Exclusive));
        assert_eq!(cli.labels, Some(LabelStyle::Guillemets));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let cli = Cli::try_parse_from(["pagelinks", "-v"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);

        let cli = Cli::try_parse_from(["pagelinks", "-v", "--log-level", "trace"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Trace);
    }
}
