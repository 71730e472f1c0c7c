use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const COMPLETED_DATES_KEY: &str = "completedDates";
pub const THEME_KEY: &str = "theme";

const RESERVED: [&str; 2] = [COMPLETED_DATES_KEY, THEME_KEY];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("checkbox id must not be empty")]
    Empty,
    #[error("checkbox id {0:?} contains an invalid character")]
    InvalidCharacter(String),
    #[error("checkbox id {0:?} collides with a reserved key")]
    Reserved(String),
}

/// Identifier of a single exercise checkbox.
///
/// Checkbox ids share the key space with the reserved entries, so they are
/// limited to ASCII letters, digits, `-` and `_` and may not spell a
/// reserved key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckboxId(String);

impl CheckboxId {
    pub fn new(raw: impl Into<String>) -> Result<Self, KeyError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(KeyError::Empty);
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(KeyError::InvalidCharacter(raw));
        }
        if RESERVED.contains(&raw.as_str()) {
            return Err(KeyError::Reserved(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CheckboxId {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckboxId> for String {
    fn from(id: CheckboxId) -> Self {
        id.0
    }
}

impl fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every key the tracker reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageKey {
    CompletedDates,
    Theme,
    Checkbox(CheckboxId),
}

impl StorageKey {
    pub fn as_str(&self) -> &str {
        match self {
            StorageKey::CompletedDates => COMPLETED_DATES_KEY,
            StorageKey::Theme => THEME_KEY,
            StorageKey::Checkbox(id) => id.as_str(),
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
