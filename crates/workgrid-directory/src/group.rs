//! Role groups (business-permission cohorts).

use serde::{Deserialize, Serialize};
use workgrid_types::GroupId;

/// A business-permission cohort, distinct from the system role.
///
/// Groups exist only to be keys in column permission maps; they carry
/// no logic. The `color` is a display hint for embedding frontends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGroup {
    /// Unique identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Display color hint (opaque to the engine).
    pub color: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl RoleGroup {
    /// Creates a group with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            color: color.into(),
            description: None,
        }
    }

    /// Attaches a description (builder form).
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_group() {
        let g = RoleGroup::new("Finance", "amber");
        assert_eq!(g.name, "Finance");
        assert!(g.description.is_none());
    }

    #[test]
    fn described_group() {
        let g = RoleGroup::new("Finance", "amber").described("functional reviewers");
        assert_eq!(g.description.as_deref(), Some("functional reviewers"));
    }
}
