//! Static site builder.
//!
//! Collects pages once, then renders each page's markdown into the layout
//! and writes `<url_path>/index.html` under the output directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use folio_pages::Page;
use folio_toc::render_content;
use rayon::prelude::*;

use crate::error::BuildError;
use crate::renderer::{LayoutRenderer, RenderProps};

/// Summary of a finished build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written.
    pub pages: usize,
    /// Pages rendered with a table of contents sidebar.
    pub with_toc: usize,
    /// Files skipped because an earlier page claimed the same URL path.
    pub skipped: Vec<String>,
}

/// Outcome of rendering a single page.
struct PageOutcome {
    has_toc: bool,
}

/// Builds a static documentation site.
pub struct SiteBuilder {
    renderer: LayoutRenderer,
    output_dir: PathBuf,
}

impl SiteBuilder {
    /// Create a builder writing to `output_dir`.
    pub fn new(renderer: LayoutRenderer, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            output_dir: output_dir.into(),
        }
    }

    /// Render every page and write it to the output directory.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Pages`] if pages cannot be collected and
    /// [`BuildError::Write`] if an output file cannot be written.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let pages = self.renderer.collector().pages()?;
        let (unique, skipped) = dedupe_url_paths(&pages);

        fs::create_dir_all(&self.output_dir).map_err(|source| BuildError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let outcomes = unique
            .par_iter()
            .map(|page| self.build_page(&pages, page))
            .collect::<Result<Vec<_>, _>>()?;

        let report = BuildReport {
            pages: outcomes.len(),
            with_toc: outcomes.iter().filter(|o| o.has_toc).count(),
            skipped,
        };
        tracing::info!(
            pages = report.pages,
            with_toc = report.with_toc,
            skipped = report.skipped.len(),
            output_dir = %self.output_dir.display(),
            "Site built"
        );
        Ok(report)
    }

    /// Render one page and write it out.
    fn build_page(&self, pages: &[Page], page: &Page) -> Result<PageOutcome, BuildError> {
        let props = RenderProps {
            frontmatter: page.front_matter.clone(),
            content: render_content(&page.body),
            title: None,
        };
        let context = self.renderer.resolve_in(pages, &props.frontmatter);
        let html = self.renderer.render_resolved(pages, &props, &context);

        let path = output_path(&self.output_dir, &page.url_path);
        write_file(&path, &html)?;
        tracing::debug!(file = %page.file, path = %path.display(), "Wrote page");

        Ok(PageOutcome {
            has_toc: context.show_sidebar,
        })
    }
}

/// Keep the first page per URL path, returning the kept pages and the
/// files of those dropped.
fn dedupe_url_paths(pages: &[Page]) -> (Vec<&Page>, Vec<String>) {
    let mut seen = HashSet::with_capacity(pages.len());
    let mut unique = Vec::with_capacity(pages.len());
    let mut skipped = Vec::new();
    for page in pages {
        if seen.insert(page.url_path.as_str()) {
            unique.push(page);
        } else {
            tracing::warn!(file = %page.file, url_path = %page.url_path, "Duplicate URL path, skipping");
            skipped.push(page.file.clone());
        }
    }
    (unique, skipped)
}

/// Output file for a URL path: `index.html` inside its directory.
fn output_path(output_dir: &Path, url_path: &str) -> PathBuf {
    url_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(output_dir.to_path_buf(), |path, segment| path.join(segment))
        .join("index.html")
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    let to_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::renderer::SiteSettings;
    use folio_pages::{FsCollector, StaticCollector};
    use folio_toc::MarkdownToc;
    use pretty_assertions::assert_eq;

    fn renderer(collector: impl folio_pages::PageCollector + 'static) -> LayoutRenderer {
        LayoutRenderer::new(
            Arc::new(collector),
            Arc::new(MarkdownToc::default()),
            SiteSettings::default(),
        )
    }

    #[test]
    fn test_output_path() {
        let root = Path::new("/out");
        assert_eq!(output_path(root, ""), PathBuf::from("/out/index.html"));
        assert_eq!(
            output_path(root, "guide/setup"),
            PathBuf::from("/out/guide/setup/index.html")
        );
    }

    #[test]
    fn test_build_writes_pages_from_source_dir() {
        let source = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(source.path().join("index.md"), "# Home\n\nWelcome.").unwrap();
        fs::create_dir(source.path().join("guide")).unwrap();
        fs::write(
            source.path().join("guide/setup.md"),
            "---\nmainClass: wide\n---\n# Setup\n\n## Install\n\nSteps.",
        )
        .unwrap();

        let builder = SiteBuilder::new(renderer(FsCollector::new(source.path())), output.path());
        let report = builder.build().unwrap();

        assert_eq!(
            report,
            BuildReport {
                pages: 2,
                with_toc: 1,
                skipped: vec![],
            }
        );

        let home = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(home.contains("<p>Welcome.</p>"));
        assert!(!home.contains("toc-sidebar"));

        let setup = fs::read_to_string(output.path().join("guide/setup/index.html")).unwrap();
        assert!(setup.contains("<main class=\"main wide\">"));
        assert!(setup.contains("<h2 id=\"install\">Install</h2>"));
        assert!(setup.contains("<a href=\"#install\">Install</a>"));
        assert!(setup.contains("<title>Setup | Documentation</title>"));
    }

    #[test]
    fn test_build_skips_duplicate_url_paths() {
        let output = tempfile::tempdir().unwrap();
        let collector = StaticCollector::new()
            .with_page(Page::from_source("guide.md", "First").unwrap())
            .with_page(Page::from_source("guide/index.md", "Second").unwrap());

        let report = SiteBuilder::new(renderer(collector), output.path())
            .build()
            .unwrap();

        assert_eq!(report.pages, 1);
        assert_eq!(report.skipped, vec!["guide/index.md".to_owned()]);
        let html = fs::read_to_string(output.path().join("guide/index.html")).unwrap();
        assert!(html.contains("<p>First</p>"));
    }

    #[test]
    fn test_build_empty_collection() {
        let output = tempfile::tempdir().unwrap();
        let target = output.path().join("site");

        let report = SiteBuilder::new(renderer(StaticCollector::new()), &target)
            .build()
            .unwrap();

        assert_eq!(report, BuildReport::default());
        assert!(target.is_dir());
    }
}
