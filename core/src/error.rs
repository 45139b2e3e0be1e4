use thiserror::Error;

/// Result type for radparse operations
pub type Result<T> = std::result::Result<T, RadparseError>;

/// Error types for radparse operations
///
/// Field extraction itself never fails; these errors only come from
/// reading reports off disk and writing the assembled table.
#[derive(Error, Debug)]
pub enum RadparseError {
    /// Input path is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    CsvError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for RadparseError {
    fn from(e: csv::Error) -> Self {
        match e.into_kind() {
            csv::ErrorKind::Io(io) => RadparseError::IoError(io),
            other => RadparseError::CsvError(format!("{:?}", other)),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for RadparseError {
    fn from(e: serde_json::Error) -> Self {
        RadparseError::JsonError(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RadparseError = csv::Error::from(io).into();
        assert!(matches!(err, RadparseError::IoError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = RadparseError::NotADirectory("/tmp/missing".to_string());
        assert_eq!(err.to_string(), "Not a directory: /tmp/missing");
    }
}
