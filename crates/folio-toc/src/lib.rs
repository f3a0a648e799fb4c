//! Table of contents for Folio pages.
//!
//! [`TocBuilder`] turns a page into an HTML outline of its headings. An empty
//! string means the page has no table of contents.
//!
//! Anchor ids are shared between the outline and the page body:
//! [`render_content`] renders markdown with the same ids that
//! [`MarkdownToc`] links to.
//!
//! # Example
//!
//! ```
//! use folio_pages::Page;
//! use folio_toc::{MarkdownToc, TocBuilder};
//!
//! let page = Page::from_source("guide.md", "# Guide\n\n## Install\n\n## Usage").unwrap();
//! let toc = MarkdownToc::default().build_toc(&page);
//!
//! assert!(toc.contains("href=\"#install\""));
//! ```

mod builder;
mod headings;
mod slug;

pub use builder::{MarkdownToc, TocBuilder};
pub use headings::{TocEntry, extract_headings, render_content};
pub use slug::{escape_html, slugify};
