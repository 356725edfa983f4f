use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An organizational subdivision of the hospital (e.g. "Cardiology").
///
/// Departments are compared ASCII-case-insensitively, so `"cardiology"` and
/// `"Cardiology"` name the same department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Department {}

impl Hash for Department {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Department {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(Department::from("Cardiology"), Department::from("cardiology"));
        assert_ne!(Department::from("Cardiology"), Department::from("Neurology"));
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(Department::from("Pediatrics"));
        assert!(set.contains(&Department::from("PEDIATRICS")));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Department::from("Oncology")).unwrap();
        assert_eq!(json, "\"Oncology\"");
    }
}
