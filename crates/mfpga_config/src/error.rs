//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating an `mfpga.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// No `mfpga.toml` was found while walking up from the start directory.
    #[error("could not find {file} in {start} or any parent directory")]
    NotFound {
        /// The file name searched for.
        file: &'static str,
        /// The directory the search started from.
        start: String,
    },
}
