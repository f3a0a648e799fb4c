//! Page collection errors.

use std::path::PathBuf;

/// Error returned when pages cannot be collected.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The source directory glob could not be built or walked.
    #[error("Failed to scan pages: {0}")]
    Scan(String),
    /// Front matter is not valid YAML or has fields of the wrong type.
    #[error("Invalid front matter in {file}: {message}")]
    FrontMatter {
        /// File identifier of the offending page.
        file: String,
        /// Parser message.
        message: String,
    },
}
