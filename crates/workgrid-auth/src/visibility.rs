//! Row-level visibility.
//!
//! Two named operations instead of one with an optional workspace:
//! [`can_view_row`] for callers that only hold row and directory data,
//! and [`can_view_row_in_workspace`] for callers that additionally know
//! the workspace and therefore its admin list. The shapes differ in
//! exactly one rule (workspace-admin override); keeping both explicit
//! means a caller can never accidentally drop that rule by passing
//! nothing.

use workgrid_directory::{Directory, User};
use workgrid_schema::{TableRow, Workspace};

use crate::is_workspace_admin;

/// Whether the user may see this row, without workspace context.
///
/// Decision order, first match wins:
///
/// 1. Global admin → visible.
/// 2. Row owner → visible (owners always see their own rows).
/// 3. Leader whose transitive subordinates include the owner → visible.
/// 4. Otherwise → not visible.
///
/// Pure; evaluated on every row render and re-evaluated by the mutation
/// engine, so it must stay cheap and side-effect-free.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use workgrid_auth::can_view_row;
/// use workgrid_directory::{Directory, RoleGroup, User};
/// use workgrid_schema::{TableRow, Workspace};
/// use workgrid_types::SystemRole;
///
/// let mut dir = Directory::new();
/// let group = RoleGroup::new("General", "blue");
/// let group_id = group.id;
/// dir.add_group(group).expect("fresh group");
///
/// let lead = User::new("L", SystemRole::Leader, group_id);
/// let report = User::new("M", SystemRole::Member, group_id).reporting_to(lead.id);
/// dir.add_user(lead.clone()).expect("fresh");
/// dir.add_user(report.clone()).expect("fresh");
///
/// let ws = Workspace::new("Expenses", "calculator");
/// let row = TableRow::draft(&ws, report.id, Utc::now());
///
/// assert!(can_view_row(&report, &row, &dir)); // owner
/// assert!(can_view_row(&lead, &row, &dir));   // manager
/// ```
#[must_use]
pub fn can_view_row(user: &User, row: &TableRow, directory: &Directory) -> bool {
    if user.role.is_admin() {
        return true;
    }
    if user.id == row.owner_id {
        return true;
    }
    if user.role.is_leader() && directory.subordinates_of(user.id).contains(&row.owner_id) {
        return true;
    }
    false
}

/// Whether the user may see this row, with workspace context.
///
/// Same decision order as [`can_view_row`] with one extra rule after
/// the global-admin check: a workspace admin sees every row of their
/// workspace regardless of ownership or hierarchy.
#[must_use]
pub fn can_view_row_in_workspace(
    user: &User,
    row: &TableRow,
    directory: &Directory,
    workspace: &Workspace,
) -> bool {
    if is_workspace_admin(user, workspace) {
        return true;
    }
    can_view_row(user, row, directory)
}
