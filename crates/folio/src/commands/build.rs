//! `folio build` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_layout::SiteBuilder;

use super::renderer_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for rendered pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long, env = "FOLIO_TITLE")]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            title: self.title,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.docs_resolved.source_dir;
        let output_dir = config.docs_resolved.output_dir.clone();
        output.field("Source", &source_dir.display().to_string());
        output.field("Output", &output_dir.display().to_string());

        let builder = SiteBuilder::new(renderer_from_config(&config), &output_dir);
        let report = builder.build()?;

        for file in &report.skipped {
            output.warning(&format!("Skipped {file}: URL path already taken"));
        }
        if report.pages == 0 {
            output.warning("No pages found");
            return Ok(());
        }
        output.success(&format!(
            "Built {} pages ({} with table of contents) to {}",
            report.pages,
            report.with_toc,
            output_dir.display()
        ));
        Ok(())
    }
}
