//! Filesystem page collector.

use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::collector::PageCollector;
use crate::error::PageError;
use crate::page::Page;

/// Collects markdown pages from a source directory.
///
/// Every `*.md` file below the source directory becomes a page, except files
/// inside hidden directories or hidden files themselves. Pages are ordered by
/// their file identifier.
#[derive(Debug, Clone)]
pub struct FsCollector {
    source_dir: PathBuf,
}

impl FsCollector {
    /// Create a collector rooted at `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Glob matching every markdown file under the source directory.
    fn pattern(&self) -> String {
        let root = Pattern::escape(&self.source_dir.to_string_lossy());
        format!("{root}/**/*.md")
    }

    /// Read and parse one file.
    fn load(&self, path: &Path, file: String) -> Result<Page, PageError> {
        let source = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Page::from_source(file, &source)
    }
}

impl PageCollector for FsCollector {
    fn pages(&self) -> Result<Vec<Page>, PageError> {
        if !self.source_dir.is_dir() {
            tracing::warn!(
                source_dir = %self.source_dir.display(),
                "Source directory does not exist, no pages collected"
            );
            return Ok(Vec::new());
        }

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        let paths = glob::glob_with(&self.pattern(), options)
            .map_err(|e| PageError::Scan(e.to_string()))?;

        let mut entries = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| PageError::Scan(e.to_string()))?;
            if !path.is_file() {
                continue;
            }
            let Some(file) = file_identifier(&self.source_dir, &path) else {
                continue;
            };
            entries.push((file, path));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let pages = entries
            .into_iter()
            .map(|(file, path)| self.load(&path, file))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = pages.len(), "Collected pages");
        Ok(pages)
    }
}

/// File identifier for `path` relative to `root`, `/`-separated.
///
/// Returns `None` for paths outside `root` or with hidden components.
fn file_identifier(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return None;
        };
        let part = part.to_str()?;
        if part.starts_with('.') {
            return None;
        }
        parts.push(part);
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn files(collector: &FsCollector) -> Vec<String> {
        collector
            .pages()
            .unwrap()
            .into_iter()
            .map(|p| p.file)
            .collect()
    }

    #[test]
    fn test_collects_nested_markdown_sorted() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "index.md", "# Home");
        write(temp_dir.path(), "guide/setup.md", "# Setup");
        write(temp_dir.path(), "guide/index.md", "# Guide");
        write(temp_dir.path(), "about.md", "# About");

        let collector = FsCollector::new(temp_dir.path());

        assert_eq!(
            files(&collector),
            vec!["about.md", "guide/index.md", "guide/setup.md", "index.md"]
        );
    }

    #[test]
    fn test_skips_hidden_and_non_markdown() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "guide.md", "# Guide");
        write(temp_dir.path(), ".drafts/secret.md", "# Secret");
        write(temp_dir.path(), ".hidden.md", "# Hidden");
        write(temp_dir.path(), "notes.txt", "text");

        let collector = FsCollector::new(temp_dir.path());

        assert_eq!(files(&collector), vec!["guide.md"]);
    }

    #[test]
    fn test_parses_front_matter_and_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "guide.md",
            "---\ntitle: User Guide\nmainClass: wide\n---\n## Install\n",
        );

        let pages = FsCollector::new(temp_dir.path()).pages().unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "User Guide");
        assert_eq!(pages[0].url_path, "guide");
        assert_eq!(pages[0].body, "## Install\n");
        assert_eq!(pages[0].front_matter.main_class.as_deref(), Some("wide"));
    }

    #[test]
    fn test_missing_source_dir_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let collector = FsCollector::new(temp_dir.path().join("missing"));
        assert!(collector.pages().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_front_matter_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "broken.md", "---\ntitle: [oops\n---\n");

        let err = FsCollector::new(temp_dir.path()).pages().unwrap_err();

        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_file_identifier() {
        let root = Path::new("/docs");
        assert_eq!(
            file_identifier(root, Path::new("/docs/a/b.md")),
            Some("a/b.md".to_owned())
        );
        assert_eq!(file_identifier(root, Path::new("/docs/.git/x.md")), None);
        assert_eq!(file_identifier(root, Path::new("/other/x.md")), None);
    }
}
