use thiserror::Error;

use crate::records::RecordKind;

/// Core error types for medboard records
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Invalid record data: {message}")]
    InvalidRecord { message: String },

    #[error("Duplicate record: {kind}/{id}")]
    DuplicateRecord { kind: RecordKind, id: String },

    #[error("Dangling reference: {kind}/{id} refers to missing {target}")]
    DanglingReference {
        kind: RecordKind,
        id: String,
        target: String,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a new InvalidId error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    /// Create a new InvalidRecord error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create a new DuplicateRecord error
    pub fn duplicate_record(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::DuplicateRecord {
            kind,
            id: id.into(),
        }
    }

    /// Create a new DanglingReference error
    pub fn dangling_reference(
        kind: RecordKind,
        id: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            kind,
            id: id.into(),
            target: target.into(),
        }
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::duplicate_record(RecordKind::Patient, "p1");
        assert_eq!(err.to_string(), "Duplicate record: patient/p1");

        let err = CoreError::dangling_reference(RecordKind::Emr, "e1", "patient/p9");
        assert_eq!(
            err.to_string(),
            "Dangling reference: emr/e1 refers to missing patient/p9"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: CoreError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
