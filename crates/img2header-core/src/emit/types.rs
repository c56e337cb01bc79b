//! Core types for header emission.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Error types for header emission.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The header name cannot be used inside C identifiers and macros.
    #[error("Invalid header name '{0}': expected a C identifier ([A-Za-z_][A-Za-z0-9_]*)")]
    InvalidName(String),

    /// The destination file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Identifier interpolated into the include guard, the dimension constants
/// and the array name.
///
/// Only plain C identifiers are accepted, so the generated header always
/// preprocesses and compiles. The name is used exactly as given, with no
/// case normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderName(String);

impl HeaderName {
    /// Validate `name` as a C identifier.
    ///
    /// # Errors
    ///
    /// Returns `EmitError::InvalidName` if the name is empty, starts with a
    /// digit, or contains anything other than ASCII letters, digits and `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, EmitError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid_start && valid_rest {
            Ok(Self(name))
        } else {
            Err(EmitError::InvalidName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Include guard macro, `IMAGE_DATA_<name>_H`.
    pub fn include_guard(&self) -> String {
        format!("IMAGE_DATA_{}_H", self.0)
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HeaderName {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
