//! Error types for configuration storage operations.

use std::path::PathBuf;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while loading, saving, capturing or restoring
/// configuration state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file does not exist at the expected location.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the configuration file failed.
    ///
    /// The contained path identifies the file the operation targeted; the
    /// source error carries the underlying I/O condition.
    #[error("Failed to access configuration file {}: {}", .path.display(), .source)]
    Io {
        /// The file the failed operation targeted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file contents are not valid TOML for the expected
    /// schema.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
