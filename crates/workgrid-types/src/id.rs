//! Identifier types for workgrid.
//!
//! All identifiers are UUID-based so that rows, users, and audit entries
//! stay unique without coordination — directory imports and spreadsheet
//! ingestion can mint ids freely without colliding with existing data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a user in the directory.
///
/// A user is "who is acting": the owner recorded on a row, the operator
/// recorded on an audit entry, and the actor every access-control
/// decision is evaluated for.
///
/// # Example
///
/// ```
/// use workgrid_types::UserId;
///
/// let a = UserId::new();
/// let b = UserId::new();
/// assert_ne!(a, b);
/// assert!(a.to_string().starts_with("user:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new [`UserId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier for a role group.
///
/// Groups are the business-permission cohorts that column permission
/// maps are keyed by; they are orthogonal to the coarse system role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub Uuid);

impl GroupId {
    /// Creates a new [`GroupId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GroupId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group:{}", self.0)
    }
}

/// Identifier for a workspace (a configurable business process).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub Uuid);

impl WorkspaceId {
    /// Creates a new [`WorkspaceId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ws:{}", self.0)
    }
}

/// Identifier for a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub Uuid);

#[allow(clippy::new_without_default)] // Default intentionally not implemented - see below
impl RowId {
    /// Creates a new [`RowId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

// NOTE: RowId intentionally does NOT implement Default.
// Default::default() would mint an id that is not registered in any Grid,
// and batch updates addressing it would silently match nothing. Rows are
// created through Grid::create_draft or Grid::import_records.

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row:{}", self.0)
    }
}

/// Identifier for an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

#[allow(clippy::new_without_default)] // Default intentionally not implemented - entries are minted by the audit log
impl EntryId {
    /// Creates a new [`EntryId`] with a random UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "log:{}", self.0)
    }
}
