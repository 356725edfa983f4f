use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\-\.]{1,64}$").expect("Invalid id regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("id is empty")]
    Empty,
    #[error("id '{0}' must be 1-64 characters of [A-Za-z0-9-.]")]
    Malformed(String),
}

/// Checks that a record id is 1-64 characters of letters, digits, `-` or `.`.
pub fn validate_id(id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }
    if !ID_REGEX.is_match(id) {
        return Err(IdError::Malformed(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_id("p1").is_ok());
        assert!(validate_id("emr-2024.001").is_ok());
        assert!(validate_id(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_invalid_ids() {
        assert_eq!(validate_id(""), Err(IdError::Empty));
        assert!(matches!(validate_id("p 1"), Err(IdError::Malformed(_))));
        assert!(matches!(validate_id("p/1"), Err(IdError::Malformed(_))));
        assert!(validate_id(&"a".repeat(65)).is_err());
    }
}
