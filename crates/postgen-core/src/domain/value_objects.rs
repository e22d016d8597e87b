//! Domain value objects: Slug.
//!
//! # Design
//!
//! A slug is opaque. Apart from being non-empty it is never normalised,
//! sanitised, or checked against a character set: whatever the operator
//! typed becomes `<slug>.html` verbatim.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extension appended to every scaffolded post.
pub const POST_EXTENSION: &str = "html";

// ── Slug ─────────────────────────────────────────────────────────────────────

/// Short identifier of a blog post, used to derive the output file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wrap a raw slug.
    ///
    /// # Errors
    /// [`DomainError::EmptySlug`] if `value` is the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptySlug);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<slug>.html`, built by plain concatenation.
    pub fn file_name(&self) -> String {
        format!("{}.{POST_EXTENSION}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
