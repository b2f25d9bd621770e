//! # Book Model
//!
//! The book record and the request payloads that create or modify it.

use serde::{Deserialize, Serialize};

use super::errors::{RegistryError, RegistryResult};

/// Registry-assigned book identifier
pub type BookId = u64;

/// A single book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned by the registry, never reused
    pub id: BookId,

    pub title: String,

    pub author: String,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Overwrite the fields supplied (and non-empty) in the patch.
    ///
    /// The id is never touched.
    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = non_empty(patch.title) {
            self.title = title;
        }
        if let Some(author) = non_empty(patch.author) {
            self.author = author;
        }
    }
}

/// Book creation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    /// Check that both fields are present and non-empty
    pub fn validate(self) -> RegistryResult<ValidBook> {
        match (non_empty(self.title), non_empty(self.author)) {
            (Some(title), Some(author)) => Ok(ValidBook { title, author }),
            _ => Err(RegistryError::missing_fields()),
        }
    }
}

/// A creation request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBook {
    pub title: String,
    pub author: String,
}

/// Book update request
///
/// Absent and empty fields are left unchanged on the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl BookPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: None,
        }
    }

    pub fn author(author: impl Into<String>) -> Self {
        Self {
            title: None,
            author: Some(author.into()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
