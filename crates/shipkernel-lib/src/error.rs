use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the shipkernel library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The simulator itself has no failure path: limit violations are recorded as
/// data and unknown vessels fall back to a default profile. Errors only arise
/// while constructing a vessel catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// Vessel catalog file could not be located at the resolved path.
    #[error("vessel catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Raised when vessel data fails validation.
    #[error("invalid vessel data: {message}")]
    VesselDataValidation { message: String },

    /// Raised when two catalog entries share an IMO number.
    #[error("duplicate IMO number encountered: {imo_number}")]
    DuplicateImoNumber { imo_number: u64 },

    /// Raised when a catalog is constructed with no vessels. The catalog's
    /// first entry doubles as the default profile, so an empty catalog has
    /// no usable fallback.
    #[error("vessel catalog contains no vessels")]
    EmptyCatalog,

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
