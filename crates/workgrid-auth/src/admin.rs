//! Workspace admin determination.

use workgrid_directory::User;
use workgrid_schema::Workspace;

/// Whether the user holds admin rights over this workspace.
///
/// True for global admins (the role bypasses everything, everywhere)
/// and for users on the workspace's own admin list. Workspace-listed
/// admins hold these rights in *this* workspace only; elsewhere they
/// follow ordinary group rules.
///
/// Pure: no side effects, same answer for the same inputs.
///
/// # Example
///
/// ```
/// use workgrid_auth::is_workspace_admin;
/// use workgrid_directory::User;
/// use workgrid_schema::Workspace;
/// use workgrid_types::{GroupId, SystemRole};
///
/// let mut ws = Workspace::new("Expenses", "calculator");
/// let delegate = User::new("Dana", SystemRole::Member, GroupId::new());
/// ws.grant_admin(delegate.id);
///
/// let other = Workspace::new("Salaries", "users");
/// assert!(is_workspace_admin(&delegate, &ws));
/// assert!(!is_workspace_admin(&delegate, &other));
/// ```
#[must_use]
pub fn is_workspace_admin(user: &User, workspace: &Workspace) -> bool {
    user.role.is_admin() || workspace.lists_admin(user.id)
}
