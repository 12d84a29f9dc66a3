//! Column-level access decisions.

use workgrid_directory::User;
use workgrid_schema::{STATUS_FIELD, TableRow, Workspace, is_meta_field};
use workgrid_types::AccessLevel;

use crate::is_workspace_admin;

/// The access level a user holds on one field of one row.
///
/// Evaluated on every cell render, and re-evaluated by the mutation
/// engine at apply time so a stale render can never authorize a write.
/// Pure and total: any (user, row, field, workspace) combination yields
/// a level; unknown fields yield [`AccessLevel::None`] rather than an
/// error.
///
/// Decision order, first match wins:
///
/// 1. Workspace admin (global or listed) → `Write`, bypassing every
///    lifecycle lock.
/// 2. `field == "status"` → `Write` for every user. Status is the
///    lifecycle channel: reviewers move rows along by writing it, and
///    the mutation engine — not this function — validates the value.
///    Deliberately permissive; see the crate docs.
/// 3. Meta fields (`id`, `updated_at`, `owner_id`, `version`) → `Read`.
/// 4. Field not in the workspace schema → `None`.
/// 5. Base permission from the column's group map (absent ⇒ `None`).
/// 6. Lifecycle lock, only when the base resolved to `Write`:
///    - owner of a `Draft` row → stays `Write`;
///    - non-owner of a `Draft` row → `Read`;
///    - `Approved` or `Rejected` row → `Read` regardless of ownership;
///    - `Pending` row → stays `Write` (this is how reviewers annotate,
///      e.g. an approval-note column, while the row is in review).
///
/// The lock only ever downgrades: a base of `Read` or `None` is
/// returned as-is.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use workgrid_auth::column_access;
/// use workgrid_directory::User;
/// use workgrid_schema::{ColumnSpec, TableRow, Workspace};
/// use workgrid_types::{AccessLevel, FieldType, GroupId, RowStatus, SystemRole};
///
/// let submitters = GroupId::new();
/// let mut ws = Workspace::new("Expenses", "calculator");
/// ws.add_column(
///     ColumnSpec::new("amount", "Amount", FieldType::Number)
///         .permit(submitters, AccessLevel::Write),
/// )
/// .expect("fresh field");
///
/// let owner = User::new("Ada", SystemRole::Member, submitters);
/// let mut row = TableRow::draft(&ws, owner.id, Utc::now());
///
/// assert_eq!(column_access(&owner, &row, "amount", &ws), AccessLevel::Write);
///
/// row.status = RowStatus::Approved;
/// assert_eq!(column_access(&owner, &row, "amount", &ws), AccessLevel::Read);
/// ```
#[must_use]
pub fn column_access(
    user: &User,
    row: &TableRow,
    field: &str,
    workspace: &Workspace,
) -> AccessLevel {
    if is_workspace_admin(user, workspace) {
        return AccessLevel::Write;
    }

    if field == STATUS_FIELD {
        return AccessLevel::Write;
    }

    if is_meta_field(field) {
        return AccessLevel::Read;
    }

    let Some(column) = workspace.column(field) else {
        return AccessLevel::None;
    };

    let base = column.permission_for(user.group_id);

    if base == AccessLevel::Write {
        let is_owner = user.id == row.owner_id;
        if row.status.is_draft() && !is_owner {
            return AccessLevel::Read;
        }
        if row.status.is_locked() {
            return AccessLevel::Read;
        }
    }

    base
}
