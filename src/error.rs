//! Error types for tate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TateError>;

/// Errors returned by the fallible parts of the crate.
///
/// The layout engine itself never fails; these cover option validation,
/// export preconditions and the font catalog.
#[derive(Debug, Error)]
pub enum TateError {
    #[error("Invalid color: {0:?} (expected #RGB or #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid font size: {0} (must be a positive, finite number)")]
    InvalidFontSize(f64),

    #[error("No font family selected")]
    MissingFontFamily,

    #[error("Nothing to export: text is empty")]
    EmptyText,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Font catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
