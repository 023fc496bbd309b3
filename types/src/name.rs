//! Validated display names for states, songs and judges.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty name made only of lowercase ASCII letters and spaces.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Parse and validate a name.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        if is_valid_name(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(TypesError::InvalidName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name charset check: non-empty, `a..=z` and `' '` only.
pub fn is_valid_name(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_lowercase() || b == b' ')
}

impl TryFrom<String> for Name {
    type Error = TypesError;
    fn try_from(raw: String) -> Result<Self, Self::Error> {
        if is_valid_name(&raw) {
            Ok(Self(raw))
        } else {
            Err(TypesError::InvalidName(raw))
        }
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_and_spaces() {
        assert!(is_valid_name("united kingdom"));
        assert_eq!(Name::parse("spain").unwrap().as_str(), "spain");
    }

    #[test]
    fn rejects_uppercase_digits_and_punctuation() {
        assert!(!is_valid_name("Spain"));
        assert!(!is_valid_name("abba2"));
        assert!(!is_valid_name("bosnia-herzegovina"));
        assert!(!is_valid_name("caf\u{e9}"));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Name::parse(""), Err(TypesError::InvalidName(_))));
    }
}
