//! Layout and build errors.

use std::path::PathBuf;

use folio_pages::PageError;

/// Error returned while rendering a layout.
///
/// A page missing from the collection is not an error; it renders without
/// a table of contents.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// Pages could not be collected.
    #[error(transparent)]
    Pages(#[from] PageError),
}

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Pages could not be collected.
    #[error(transparent)]
    Pages(#[from] PageError),
    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
