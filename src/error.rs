//! Error types for Verscout operations.
//!
//! This module defines [`ScoutError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! The version probe itself never returns errors by contract; failures there
//! degrade to the `"unknown"` sentinel. `ScoutError` serves the layers around
//! it: showcase staging, serialization, and the CLI surface.

use thiserror::Error;

/// Core error type for Verscout operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Verscout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ScoutError = io_err.into();
        assert!(matches!(err, ScoutError::Io(_)));
    }

    #[test]
    fn json_error_converts_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ScoutError = json_err.into();
        assert!(matches!(err, ScoutError::Json(_)));
    }

    #[test]
    fn other_error_converts_from_anyhow() {
        let err: ScoutError = anyhow::anyhow!("something else").into();
        assert!(err.to_string().contains("something else"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(anyhow::anyhow!("test").into())
        }
        assert!(returns_error().is_err());
    }
}
