//! The [`TocBuilder`] trait and its markdown implementation.

use std::fmt::Write;

use folio_pages::Page;

use crate::headings::{TocEntry, extract_headings};
use crate::slug::escape_html;

/// Produces a table of contents fragment for a page.
///
/// Returns an empty string when the page has no table of contents.
pub trait TocBuilder: Send + Sync {
    /// Build the HTML outline for `page`.
    fn build_toc(&self, page: &Page) -> String;
}

impl<F> TocBuilder for F
where
    F: Fn(&Page) -> String + Send + Sync,
{
    fn build_toc(&self, page: &Page) -> String {
        self(page)
    }
}

/// Builds a table of contents from a page's markdown headings.
///
/// Only headings within `min_level..=max_level` are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownToc {
    min_level: u8,
    max_level: u8,
}

impl Default for MarkdownToc {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
        }
    }
}

impl MarkdownToc {
    /// Create a builder for the given heading range.
    ///
    /// Levels are clamped to `1..=6`; an inverted range lists nothing.
    #[must_use]
    pub fn new(min_level: u8, max_level: u8) -> Self {
        Self {
            min_level: min_level.clamp(1, 6),
            max_level: max_level.clamp(1, 6),
        }
    }

    /// Headings of `page` that fall inside the configured range.
    #[must_use]
    pub fn entries(&self, page: &Page) -> Vec<TocEntry> {
        extract_headings(&page.body)
            .into_iter()
            .filter(|entry| (self.min_level..=self.max_level).contains(&entry.level))
            .collect()
    }

    /// Render entries as the outline fragment.
    fn render(&self, entries: &[TocEntry]) -> String {
        if entries.is_empty() {
            return String::new();
        }

        let mut html = String::with_capacity(64 * entries.len() + 64);
        html.push_str("<h2 class=\"toc-title\">On this page</h2>\n");
        html.push_str("<ul class=\"toc\">\n");
        for entry in entries {
            let depth = entry.level - self.min_level;
            let _ = writeln!(
                html,
                "<li class=\"toc-level-{}\" data-depth=\"{depth}\"><a href=\"#{}\">{}</a></li>",
                entry.level,
                escape_html(&entry.id),
                escape_html(&entry.title),
            );
        }
        html.push_str("</ul>\n");
        html
    }
}

impl TocBuilder for MarkdownToc {
    fn build_toc(&self, page: &Page) -> String {
        let entries = self.entries(page);
        tracing::trace!(file = %page.file, count = entries.len(), "Built table of contents");
        self.render(&entries)
    }
}
