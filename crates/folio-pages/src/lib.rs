//! Page collection for Folio.
//!
//! Provides the [`Page`] and [`FrontMatter`] model, the [`PageCollector`]
//! trait used by the layout to enumerate pages in collection order, and two
//! collectors:
//!
//! - [`FsCollector`] reads markdown files from a source directory
//! - [`StaticCollector`] serves a fixed, in-memory list
//!
//! # File Identifiers
//!
//! A page is identified by its `file`: the path relative to the source
//! directory with `/` separators (e.g. `"guide/setup.md"`). Lookups compare
//! identifiers as plain strings.

mod collector;
mod error;
mod front_matter;
mod fs;
mod page;

pub use collector::{PageCollector, StaticCollector};
pub use error::PageError;
pub use front_matter::{parse_front_matter, split_front_matter};
pub use fs::FsCollector;
pub use page::{FrontMatter, Page, url_path_for};
