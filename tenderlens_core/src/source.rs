//! Immutable document text shared between the loader and the engine.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The full extracted content of one loaded document.
///
/// Cloning is cheap; the text itself is never mutated. Loading a new
/// document replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText(Arc<str>);

impl SourceText {
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing but whitespace to work with.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Deref for SourceText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SourceText {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for SourceText {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
