//! `folio inspect` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_pages::FrontMatter;

use super::renderer_from_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// File identifier relative to the source directory (e.g. `guide/setup.md`).
    file: String,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InspectArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let renderer = renderer_from_config(&config);

        let context = renderer.resolve(&FrontMatter::for_file(self.file.as_str()))?;

        output.field("Site", &renderer.settings().title);
        output.field("File", &self.file);
        match &context.page {
            Some(page) => {
                output.field("Title", &page.title);
                output.field("URL", &page.href());
            }
            None => output.warning("No page with this file identifier"),
        }
        output.field(
            "TOC sidebar",
            if context.show_sidebar { "shown" } else { "hidden" },
        );
        if context.show_sidebar {
            output.info(context.toc.trim_end());
        }
        Ok(())
    }
}
