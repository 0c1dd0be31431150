use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registry key for a staff record.
///
/// Ids are opaque strings: the seeded roster uses short numeric ids while
/// records created at runtime get a UUID v4 rendered in its hyphenated form.
/// Any string is a valid key; an id nobody stored simply misses on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Generate a fresh id for a newly created record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StaffId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StaffId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_uuids_and_distinct() {
        let a = StaffId::generate();
        let b = StaffId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn any_string_is_kept_verbatim() {
        assert_eq!(StaffId::from("1").as_str(), "1");
        assert_eq!(StaffId::from(" ".to_string()).as_str(), " ");
        assert_eq!(StaffId::from("").to_string(), "");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = StaffId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }
}
