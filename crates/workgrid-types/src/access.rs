//! Column access levels.

use serde::{Deserialize, Serialize};

/// Access level a user holds on one column of one row.
///
/// Levels are ordered `None < Read < Write`, so "downgrade to read" is
/// simply [`min`](Self::min_with). The access-control engine only ever
/// downgrades: an explicitly configured `Read` or `None` is never
/// upgraded by lifecycle rules.
///
/// # Example
///
/// ```
/// use workgrid_types::AccessLevel;
///
/// assert!(AccessLevel::Write.can_write());
/// assert!(AccessLevel::Read.can_read());
/// assert!(!AccessLevel::None.can_read());
/// assert_eq!(AccessLevel::Write.min_with(AccessLevel::Read), AccessLevel::Read);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AccessLevel {
    /// The column is invisible to the user.
    #[default]
    None,
    /// The column is visible but not editable.
    Read,
    /// The column is editable.
    Write,
}

impl AccessLevel {
    /// Returns `true` when the level permits editing.
    #[must_use]
    pub fn can_write(self) -> bool {
        matches!(self, Self::Write)
    }

    /// Returns `true` when the level permits at least viewing.
    #[must_use]
    pub fn can_read(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the weaker of the two levels.
    #[must_use]
    pub fn min_with(self, other: Self) -> Self {
        self.min(other)
    }

    /// Parses a level name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use workgrid_types::AccessLevel;
    ///
    /// assert_eq!(AccessLevel::parse("write"), Some(AccessLevel::Write));
    /// assert_eq!(AccessLevel::parse("NONE"), Some(AccessLevel::None));
    /// assert_eq!(AccessLevel::parse("rw"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "READ" => Some(Self::Read),
            "WRITE" => Some(Self::Write),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Read => "READ",
            Self::Write => "WRITE",
        };
        write!(f, "{name}")
    }
}
