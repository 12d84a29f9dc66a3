//! User records.
//!
//! A [`User`] is pure identity plus classification: which group drives
//! their column permissions, which system role sets their coarse tier,
//! and who (if anyone) manages them. Permission decisions themselves
//! live in `workgrid-auth`.

use serde::{Deserialize, Serialize};
use workgrid_types::{GroupId, SystemRole, UserId};

/// A member of the directory.
///
/// `manager_id` links form a forest used by the subordinate resolver; a
/// dangling link (the manager was deleted) is tolerated everywhere and
/// simply resolves to "no such user".
///
/// # Example
///
/// ```
/// use workgrid_directory::User;
/// use workgrid_types::{GroupId, SystemRole};
///
/// let sales = GroupId::new();
/// let manager = User::new("Dana", SystemRole::Leader, sales);
/// let report = User::new("Kim", SystemRole::Member, sales).reporting_to(manager.id);
///
/// assert_eq!(report.manager_id, Some(manager.id));
/// assert!(!report.role.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name, recorded verbatim on audit entries.
    pub name: String,
    /// Coarse capability tier.
    pub role: SystemRole,
    /// Business-permission cohort; keys the column permission maps.
    pub group_id: GroupId,
    /// Direct manager, if any. May dangle after directory edits.
    pub manager_id: Option<UserId>,
}

impl User {
    /// Creates a user with a fresh id and no manager.
    #[must_use]
    pub fn new(name: impl Into<String>, role: SystemRole, group_id: GroupId) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            role,
            group_id,
            manager_id: None,
        }
    }

    /// Sets the direct manager (builder form).
    #[must_use]
    pub fn reporting_to(mut self, manager: UserId) -> Self {
        self.manager_id = Some(manager);
        self
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_no_manager() {
        let u = User::new("Ada", SystemRole::Member, GroupId::new());
        assert!(u.manager_id.is_none());
    }

    #[test]
    fn reporting_to_sets_manager() {
        let boss = User::new("Bo", SystemRole::Leader, GroupId::new());
        let u = User::new("Ada", SystemRole::Member, GroupId::new()).reporting_to(boss.id);
        assert_eq!(u.manager_id, Some(boss.id));
    }

    #[test]
    fn display_shows_name_and_role() {
        let u = User::new("Ada", SystemRole::Admin, GroupId::new());
        assert_eq!(u.to_string(), "Ada (ADMIN)");
    }
}
