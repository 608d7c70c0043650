//! Participant identity
//!
//! A participant is a validated display name plus the id the presence
//! directory assigned to it at registration time.

use std::fmt;

use crate::error::DomainError;

/// Validated display name for a room participant
///
/// Between 1 and 15 characters, counted as Unicode scalar values. The
/// wire message carries the name as a plain string; validation only
/// guards locally entered names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Maximum length in characters
    pub const MAX_LEN: usize = 15;

    /// Validate and construct a display name
    ///
    /// # Errors
    /// Returns `DomainError::InvalidDisplayName` if the name is empty or
    /// longer than [`Self::MAX_LEN`] characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidDisplayName("name is empty".to_string()));
        }

        let len = name.chars().count();
        if len > Self::MAX_LEN {
            return Err(DomainError::InvalidDisplayName(format!(
                "name is {len} characters, maximum is {}",
                Self::MAX_LEN
            )));
        }

        Ok(Self(name))
    }

    /// View the name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered participant
///
/// Created exactly once per session, after `PresenceDirectory::register`
/// returns. The id is a positive database-assigned integer (both backends
/// allocate from a 1-based sequence, so a live identity never has id 0)
/// and is immutable for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    id: i64,
    name: DisplayName,
}

impl Identity {
    /// Bind a directory-assigned id to a display name
    #[must_use]
    pub fn new(id: i64, name: DisplayName) -> Self {
        Self { id, name }
    }

    /// The directory-assigned participant id
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The participant's display name
    #[must_use]
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}
