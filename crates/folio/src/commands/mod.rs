//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod inspect;

use std::sync::Arc;

use folio_config::Config;
use folio_layout::{LayoutRenderer, SiteSettings};
use folio_pages::FsCollector;
use folio_toc::MarkdownToc;

pub(crate) use build::BuildArgs;
pub(crate) use inspect::InspectArgs;

/// Create a layout renderer over the configured source directory.
pub(crate) fn renderer_from_config(config: &Config) -> LayoutRenderer {
    tracing::debug!(
        config = ?config.config_path,
        source_dir = %config.docs_resolved.source_dir.display(),
        "Creating layout renderer"
    );
    LayoutRenderer::new(
        Arc::new(FsCollector::new(config.docs_resolved.source_dir.clone())),
        Arc::new(MarkdownToc::new(config.toc.min_level, config.toc.max_level)),
        SiteSettings::from(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_pages::FrontMatter;

    #[test]
    fn test_renderer_from_config_uses_toc_range() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(
            dir.path().join("docs/guide.md"),
            "# Guide\n\n## Install\n\n### Details\n",
        )
        .unwrap();
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[toc]\nmin_level = 3\nmax_level = 3\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let context = renderer_from_config(&config)
            .resolve(&FrontMatter::for_file("guide.md"))
            .unwrap();

        assert!(context.show_sidebar);
        assert!(context.toc.contains("#details"));
        assert!(!context.toc.contains("#install"));
    }

    #[test]
    fn test_renderer_from_config_uses_site_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"Handbook\"\nlang = \"de\"\n").unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        let renderer = renderer_from_config(&config);

        assert_eq!(renderer.settings().title, "Handbook");
        assert_eq!(renderer.settings().lang, "de");
    }
}
