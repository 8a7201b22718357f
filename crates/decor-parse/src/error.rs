//! Error types for the parser crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a resource database or a bitmap file.
///
/// Only whole-file failures are errors. Individual malformed resource lines
/// are skipped, matching how X resource managers treat them.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bitmap source is not a valid XBM file.
    #[error("malformed xbm: {message}")]
    Xbm { message: String },
}

impl ParseError {
    pub(crate) fn xbm(message: impl Into<String>) -> Self {
        Self::Xbm {
            message: message.into(),
        }
    }
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = ParseError::Io {
            path: PathBuf::from("/themes/x/themerc"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/themes/x/themerc"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_xbm_error_display() {
        let err = ParseError::xbm("no width");
        assert_eq!(err.to_string(), "malformed xbm: no width");
    }
}
