//! Error types for the enums-render crate.

/// Errors that can occur while rendering a table.
///
/// Tables are validated on construction, so the only failure left is in
/// serialization of the JSON target.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Failed to serialize the JSON document.
    #[error("failed to serialize table: {0}")]
    Json(#[from] serde_json::Error),
}
