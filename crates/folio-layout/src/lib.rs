//! Documentation page layout for Folio.
//!
//! [`LayoutRenderer`] wraps rendered page content in the shared page shell:
//! navigation, the content slot, an optional table of contents sidebar and
//! the footer. The sidebar is shown only when the current page is found in
//! the collection and its table of contents is non-empty.
//!
//! [`SiteBuilder`] renders every collected page into an output directory.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use folio_layout::{LayoutRenderer, RenderProps, SiteSettings};
//! use folio_pages::{FrontMatter, Page, StaticCollector};
//! use folio_toc::MarkdownToc;
//!
//! let collector = StaticCollector::new()
//!     .with_page(Page::from_source("guide.md", "# Guide\n\n## Install").unwrap());
//! let renderer = LayoutRenderer::new(
//!     Arc::new(collector),
//!     Arc::new(MarkdownToc::default()),
//!     SiteSettings::default(),
//! );
//!
//! let html = renderer
//!     .render(&RenderProps {
//!         frontmatter: FrontMatter::for_file("guide.md"),
//!         content: "<h2 id=\"install\">Install</h2>".to_owned(),
//!         ..RenderProps::default()
//!     })
//!     .unwrap();
//!
//! assert!(html.contains("class=\"toc-sidebar\""));
//! ```

mod builder;
mod error;
mod nav;
mod renderer;
mod shell;

pub use builder::{BuildReport, SiteBuilder};
pub use error::{BuildError, LayoutError};
pub use nav::NavItem;
pub use renderer::{LayoutContext, LayoutRenderer, RenderProps, SiteSettings};
