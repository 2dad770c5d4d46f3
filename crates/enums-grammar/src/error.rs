//! Error types for the enums-grammar crate.
//!
//! - [`GrammarError`] - selecting a built-in grammar or building its table failed
//! - [`ManifestError`] - reading, parsing, or validating a manifest failed

use camino::Utf8PathBuf;
use enums_core::ValidationError;

/// Errors that can occur while turning a built-in grammar into a table.
///
/// # Examples
///
/// ```
/// use enums_grammar::{GrammarError, Lang};
///
/// let err = "cobol".parse::<Lang>().unwrap_err();
/// assert!(matches!(err, GrammarError::UnknownLanguage(ref name) if name == "cobol"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// No built-in grammar has this name.
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    /// The grammar's node kinds did not form a valid table.
    #[error("invalid names in grammar: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading a JSON manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("failed to read manifest {path}: {source}")]
    Read {
        /// The path of the manifest.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for the expected structure.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// The manifest's names do not form a valid table.
    #[error("invalid names in manifest: {0}")]
    Validation(#[from] ValidationError),
}
