//! Theme loading errors.
//!
//! Only whole-theme failures are errors. A missing or malformed attribute is
//! resolved through its fallback chain and never reaches the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a theme cannot be produced.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No configuration file was found for the theme (nor for the default
    /// theme, when falling back was allowed).
    #[error("unable to load the theme '{name}' (searched {})", display_paths(.searched))]
    NotFound {
        /// The theme name that was requested.
        name: String,
        /// Every candidate path that was tried, in order.
        searched: Vec<PathBuf>,
    },

    /// A keyed attribute table was completed with a key left unset.
    #[error("attribute '{attribute}' was never resolved")]
    Incomplete { attribute: String },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
