//! The user/group directory.
//!
//! Process-wide reference data consumed read-only by the access-control
//! and mutation engines, and mutated only through the explicit update
//! operations here — callers never reach into the collections directly.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;
use workgrid_types::{ErrorCode, GroupId, SystemRole, UserId};

use crate::{RoleGroup, User, subordinates_of};

/// Error from a directory update operation.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The referenced user does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),

    /// The referenced group does not exist.
    #[error("unknown group: {0}")]
    UnknownGroup(GroupId),

    /// A user with this id is already present.
    #[error("duplicate user: {0}")]
    DuplicateUser(UserId),

    /// A group with this id is already present.
    #[error("duplicate group: {0}")]
    DuplicateGroup(GroupId),
}

impl ErrorCode for DirectoryError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownUser(_) => "DIRECTORY_UNKNOWN_USER",
            Self::UnknownGroup(_) => "DIRECTORY_UNKNOWN_GROUP",
            Self::DuplicateUser(_) => "DIRECTORY_DUPLICATE_USER",
            Self::DuplicateGroup(_) => "DIRECTORY_DUPLICATE_GROUP",
        }
    }

    fn is_recoverable(&self) -> bool {
        // All directory faults are input problems the operator can fix.
        true
    }
}

/// Insertion-ordered collections of users and role groups.
///
/// Deleting a user does not cascade: subordinates keep their now-dangling
/// `manager_id`, which every consumer resolves to "no such user".
/// Deleting a group likewise leaves member users pointing at it; column
/// permission lookups for an absent group default to no access.
///
/// # Example
///
/// ```
/// use workgrid_directory::{Directory, RoleGroup, User};
/// use workgrid_types::SystemRole;
///
/// let mut dir = Directory::new();
/// let sales = RoleGroup::new("Sales", "blue");
/// let sales_id = sales.id;
/// dir.add_group(sales).expect("fresh group");
///
/// let lead = User::new("Dana", SystemRole::Leader, sales_id);
/// let lead_id = lead.id;
/// dir.add_user(lead).expect("fresh user");
///
/// assert_eq!(dir.user(lead_id).map(|u| u.name.as_str()), Some("Dana"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    users: Vec<User>,
    groups: Vec<RoleGroup>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- users ---

    /// Adds a user.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::DuplicateUser`] if the id is already present.
    pub fn add_user(&mut self, user: User) -> Result<(), DirectoryError> {
        if self.user(user.id).is_some() {
            return Err(DirectoryError::DuplicateUser(user.id));
        }
        self.users.push(user);
        Ok(())
    }

    /// Removes a user.
    ///
    /// Subordinates keep their dangling `manager_id` (no cascade).
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownUser`] if the id is not present.
    pub fn remove_user(&mut self, id: UserId) -> Result<User, DirectoryError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(DirectoryError::UnknownUser(id))?;
        let removed = self.users.remove(idx);
        let orphaned = self
            .users
            .iter()
            .filter(|u| u.manager_id == Some(id))
            .count();
        if orphaned > 0 {
            debug!(user = %id, orphaned, "removed a manager; reports keep dangling links");
        }
        Ok(removed)
    }

    /// Renames a user.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownUser`] if the id is not present.
    pub fn rename_user(&mut self, id: UserId, name: impl Into<String>) -> Result<(), DirectoryError> {
        self.user_mut(id)?.name = name.into();
        Ok(())
    }

    /// Changes a user's system role.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownUser`] if the id is not present.
    pub fn set_role(&mut self, id: UserId, role: SystemRole) -> Result<(), DirectoryError> {
        self.user_mut(id)?.role = role;
        Ok(())
    }

    /// Moves a user to another group.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownUser`] if the user is not present,
    /// [`DirectoryError::UnknownGroup`] if the group is not present.
    pub fn assign_group(&mut self, id: UserId, group: GroupId) -> Result<(), DirectoryError> {
        if self.group(group).is_none() {
            return Err(DirectoryError::UnknownGroup(group));
        }
        self.user_mut(id)?.group_id = group;
        Ok(())
    }

    /// Sets or clears a user's direct manager.
    ///
    /// The manager id is not required to exist: directory imports may
    /// arrive in any order, and a dangling link is harmless.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownUser`] if the user is not present.
    pub fn set_manager(&mut self, id: UserId, manager: Option<UserId>) -> Result<(), DirectoryError> {
        self.user_mut(id)?.manager_id = manager;
        Ok(())
    }

    /// Replaces the entire user list (bulk directory import).
    ///
    /// # Errors
    ///
    /// [`DirectoryError::DuplicateUser`] if the list contains a repeated
    /// id; the directory is left unchanged in that case.
    pub fn replace_users(&mut self, users: Vec<User>) -> Result<(), DirectoryError> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.id) {
                return Err(DirectoryError::DuplicateUser(user.id));
            }
        }
        debug!(count = users.len(), "replacing user list");
        self.users = users;
        Ok(())
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All users, in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    // --- groups ---

    /// Adds a role group.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::DuplicateGroup`] if the id is already present.
    pub fn add_group(&mut self, group: RoleGroup) -> Result<(), DirectoryError> {
        if self.group(group.id).is_some() {
            return Err(DirectoryError::DuplicateGroup(group.id));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Removes a role group.
    ///
    /// Users of the group are not reassigned; permission lookups for an
    /// absent group resolve to no access.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::UnknownGroup`] if the id is not present.
    pub fn remove_group(&mut self, id: GroupId) -> Result<RoleGroup, DirectoryError> {
        let idx = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(DirectoryError::UnknownGroup(id))?;
        let members = self.users.iter().filter(|u| u.group_id == id).count();
        if members > 0 {
            debug!(group = %id, members, "removed a group that still has members");
        }
        Ok(self.groups.remove(idx))
    }

    /// Looks up a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&RoleGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// All groups, in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[RoleGroup] {
        &self.groups
    }

    // --- hierarchy ---

    /// Every user transitively managed by `leader`. See
    /// [`subordinates_of`].
    #[must_use]
    pub fn subordinates_of(&self, leader: UserId) -> HashSet<UserId> {
        subordinates_of(&self.users, leader)
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User, DirectoryError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DirectoryError::UnknownUser(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workgrid_types::assert_error_code;

    fn seeded() -> (Directory, GroupId) {
        let mut dir = Directory::new();
        let group = RoleGroup::new("General", "blue");
        let group_id = group.id;
        dir.add_group(group).expect("fresh group");
        (dir, group_id)
    }

    #[test]
    fn add_and_lookup_user() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        let id = user.id;
        dir.add_user(user).expect("fresh user");

        assert_eq!(dir.user(id).map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(dir.users().len(), 1);
    }

    #[test]
    fn duplicate_user_rejected() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        dir.add_user(user.clone()).expect("fresh user");

        let err = dir.add_user(user).expect_err("duplicate");
        assert!(matches!(err, DirectoryError::DuplicateUser(_)));
    }

    #[test]
    fn remove_user_leaves_reports_dangling() {
        let (mut dir, group) = seeded();
        let boss = User::new("Bo", SystemRole::Leader, group);
        let boss_id = boss.id;
        let report = User::new("Ada", SystemRole::Member, group).reporting_to(boss_id);
        let report_id = report.id;
        dir.add_user(boss).expect("fresh");
        dir.add_user(report).expect("fresh");

        dir.remove_user(boss_id).expect("present");

        let orphan = dir.user(report_id).expect("still present");
        assert_eq!(orphan.manager_id, Some(boss_id));
        // The dangling link resolves to nobody.
        assert!(dir.subordinates_of(boss_id).contains(&report_id));
        assert!(dir.user(boss_id).is_none());
    }

    #[test]
    fn assign_group_requires_known_group() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        let id = user.id;
        dir.add_user(user).expect("fresh");

        let err = dir.assign_group(id, GroupId::new()).expect_err("unknown group");
        assert!(matches!(err, DirectoryError::UnknownGroup(_)));
    }

    #[test]
    fn set_manager_accepts_dangling_target() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        let id = user.id;
        dir.add_user(user).expect("fresh");

        dir.set_manager(id, Some(UserId::new())).expect("allowed");
        dir.set_manager(id, None).expect("cleared");
        assert!(dir.user(id).expect("present").manager_id.is_none());
    }

    #[test]
    fn replace_users_rejects_duplicates() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        let err = dir
            .replace_users(vec![user.clone(), user])
            .expect_err("duplicate ids");
        assert!(matches!(err, DirectoryError::DuplicateUser(_)));
        assert!(dir.users().is_empty());
    }

    #[test]
    fn remove_group_keeps_members() {
        let (mut dir, group) = seeded();
        let user = User::new("Ada", SystemRole::Member, group);
        let id = user.id;
        dir.add_user(user).expect("fresh");

        dir.remove_group(group).expect("present");
        assert_eq!(dir.user(id).expect("present").group_id, group);
        assert!(dir.group(group).is_none());
    }

    #[test]
    fn error_codes_follow_conventions() {
        assert_error_code(&DirectoryError::UnknownUser(UserId::new()), "DIRECTORY_");
        assert_error_code(&DirectoryError::UnknownGroup(GroupId::new()), "DIRECTORY_");
        assert_error_code(&DirectoryError::DuplicateUser(UserId::new()), "DIRECTORY_");
        assert_error_code(&DirectoryError::DuplicateGroup(GroupId::new()), "DIRECTORY_");
    }
}
