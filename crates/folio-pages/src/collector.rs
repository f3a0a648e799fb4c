//! The [`PageCollector`] trait and the in-memory collector.

use crate::error::PageError;
use crate::page::Page;

/// Enumerates content pages.
///
/// Implementations return pages in a stable collection order. Layout lookups
/// take the first page whose `file` matches, so order decides ties.
pub trait PageCollector: Send + Sync {
    /// Collect all pages.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] if the backing source cannot be read.
    fn pages(&self) -> Result<Vec<Page>, PageError>;
}

/// Collector over a fixed list of pages.
///
/// # Example
///
/// ```
/// use folio_pages::{Page, PageCollector, StaticCollector};
///
/// let collector = StaticCollector::new()
///     .with_page(Page::from_source("guide.md", "# Guide\n\n## Setup").unwrap());
///
/// assert_eq!(collector.pages().unwrap()[0].title, "Guide");
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticCollector {
    pages: Vec<Page>,
}

impl StaticCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page. Pages keep insertion order.
    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }
}

impl From<Vec<Page>> for StaticCollector {
    fn from(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

impl PageCollector for StaticCollector {
    fn pages(&self) -> Result<Vec<Page>, PageError> {
        Ok(self.pages.clone())
    }
}
