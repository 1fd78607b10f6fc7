//! CLI runner - resolves configuration and prints the page set

use crate::cli::commands::{Cli, OutputFormat};
use crate::config::{checked_total, load_config, PaginationConfig};
use crate::error::Error;
use crate::output;
use crate::pagination::PageSet;
use crate::template;
use anyhow::Context;
use std::io::{self, Write};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI, writing to stdout
    pub fn run(&self) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI, writing to `out`
    pub fn run_to(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let config = self.resolve_config()?;
        let mut pages = PageSet::with_config(config)?;
        pages.build();

        tracing::info!(
            "Rendering {} links for {} pages as {:?}",
            pages.links().len(),
            pages.page_count(),
            self.cli.format
        );

        let rendered = self.render(&pages)?;
        out.write_all(rendered.as_bytes())
            .context("failed to write output")?;
        out.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Config file first, then explicit flags through the permissive setters
    fn resolve_config(&self) -> anyhow::Result<PaginationConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => {
                if self.cli.total.is_none() {
                    return Err(Error::config("either --total or --config is required").into());
                }
                PaginationConfig::default()
            }
        };

        if let Some(total) = self.cli.total {
            config.total_items = checked_total(total)?;
        }
        if let Some(page) = self.cli.page {
            config.set_current_page(page);
        }
        if let Some(size) = self.cli.page_size {
            config.set_page_size(size);
        }
        if let Some(range) = self.cli.range {
            config.set_neighbor_range(range);
        }
        if let Some(prefix) = &self.cli.prefix {
            config.set_link_prefix(prefix.as_str());
        }
        if let Some(path) = &self.cli.path {
            config.set_path_segment(path.as_str());
        }
        if let Some(boundary) = self.cli.boundary {
            config.set_boundary(boundary);
        }
        if let Some(style) = self.cli.labels {
            config.set_label_style(style);
        }

        tracing::debug!("Resolved pagination config: {:?}", config);
        Ok(config)
    }

    fn render(&self, pages: &PageSet) -> anyhow::Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Html => pages.to_html(),
            OutputFormat::Json => format!("{}\n", output::to_json(pages)?),
            OutputFormat::Pretty => format!("{}\n", output::to_json_pretty(pages)?),
            OutputFormat::Yaml => output::to_yaml(pages)?,
            OutputFormat::Template => {
                let item = self
                    .cli
                    .template
                    .as_deref()
                    .context("--format template requires --template")?;
                template::render_list(&self.cli.open, item, &self.cli.close, pages.links())?
            }
        };
        Ok(rendered)
    }
}
