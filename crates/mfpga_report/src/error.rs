//! Errors raised while producing reports.

use std::io;
use std::path::PathBuf;

/// A report could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// An output file could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The design lacks data the report needs.
    #[error("not all data has been loaded: the design has no {missing}")]
    Incomplete {
        /// What is empty.
        missing: &'static str,
    },

    /// Writing to the output stream failed.
    #[error(transparent)]
    Stream(#[from] io::Error),

    /// JSON serialization failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_display() {
        let err = ReportError::Incomplete { missing: "nets" };
        assert_eq!(
            err.to_string(),
            "not all data has been loaded: the design has no nets"
        );
    }

    #[test]
    fn io_display_names_path() {
        let err = ReportError::Io {
            path: PathBuf::from("scripts/net_groups.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to write scripts/net_groups.txt: denied"
        );
    }
}
