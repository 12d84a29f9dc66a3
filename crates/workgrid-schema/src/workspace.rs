//! Workspaces: a business process with a schema and a permission matrix.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use workgrid_directory::User;
use workgrid_types::{AccessLevel, ErrorCode, GroupId, UserId, WorkspaceId};

use crate::{ColumnSpec, is_reserved_field};

/// Error from a schema update operation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A column with this field key already exists in the workspace.
    #[error("duplicate column field: '{0}'")]
    DuplicateField(String),

    /// The field key collides with an engine-reserved name.
    #[error("reserved field name: '{0}'")]
    ReservedField(String),

    /// No column with this field key exists in the workspace.
    #[error("unknown column field: '{0}'")]
    UnknownField(String),
}

impl ErrorCode for SchemaError {
    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateField(_) => "SCHEMA_DUPLICATE_FIELD",
            Self::ReservedField(_) => "SCHEMA_RESERVED_FIELD",
            Self::UnknownField(_) => "SCHEMA_UNKNOWN_FIELD",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// A configurable business process: typed columns, group visibility,
/// and workspace-scoped admins.
///
/// # Visibility
///
/// An empty `active_group_ids` set means the workspace is open to every
/// internal user; a non-empty set restricts it to the listed groups.
/// Global admins always see every workspace.
///
/// # Workspace admins
///
/// `admin_ids` grants rights equivalent to global Admin but scoped to
/// this workspace only: full row visibility and unconditional column
/// write access here, ordinary rules everywhere else.
///
/// # Example
///
/// ```
/// use workgrid_schema::{ColumnSpec, Workspace};
/// use workgrid_types::{AccessLevel, FieldType, GroupId};
///
/// let submitters = GroupId::new();
/// let mut ws = Workspace::new("Expense approval", "calculator");
/// ws.add_column(
///     ColumnSpec::new("amount", "Amount", FieldType::Number)
///         .permit(submitters, AccessLevel::Write),
/// )
/// .expect("fresh field");
///
/// assert!(ws.column("amount").is_some());
/// assert!(ws.column("total").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Unique identifier.
    pub id: WorkspaceId,
    /// Display name.
    pub name: String,
    /// Display icon hint (opaque to the engine).
    pub icon: String,
    columns: Vec<ColumnSpec>,
    active_group_ids: HashSet<GroupId>,
    admin_ids: HashSet<UserId>,
}

impl Workspace {
    /// Creates an empty workspace visible to everyone.
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: WorkspaceId::new(),
            name: name.into(),
            icon: icon.into(),
            columns: Vec::new(),
            active_group_ids: HashSet::new(),
            admin_ids: HashSet::new(),
        }
    }

    // --- schema ---

    /// Adds a column to the schema.
    ///
    /// # Errors
    ///
    /// [`SchemaError::ReservedField`] when the field key is one of the
    /// engine-maintained names, [`SchemaError::DuplicateField`] when the
    /// key is already taken in this workspace.
    pub fn add_column(&mut self, column: ColumnSpec) -> Result<(), SchemaError> {
        if is_reserved_field(&column.field) {
            return Err(SchemaError::ReservedField(column.field));
        }
        if self.column(&column.field).is_some() {
            return Err(SchemaError::DuplicateField(column.field));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Looks up a column by field key.
    #[must_use]
    pub fn column(&self, field: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// All columns, in schema order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Updates one group's base permission on one column.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownField`] if the field is not in the schema.
    pub fn set_group_permission(
        &mut self,
        field: &str,
        group: GroupId,
        level: AccessLevel,
    ) -> Result<(), SchemaError> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.field == field)
            .ok_or_else(|| SchemaError::UnknownField(field.to_string()))?;
        column.group_permissions.insert(group, level);
        Ok(())
    }

    // --- visibility ---

    /// Restricts (or, with an empty set, opens) workspace visibility.
    pub fn set_active_groups(&mut self, groups: HashSet<GroupId>) {
        self.active_group_ids = groups;
    }

    /// The groups the workspace is restricted to (empty ⇒ open).
    #[must_use]
    pub fn active_group_ids(&self) -> &HashSet<GroupId> {
        &self.active_group_ids
    }

    /// Whether the user sees this workspace at all.
    ///
    /// Global admins always do; otherwise an empty restriction set means
    /// everyone, and a non-empty set means members of the listed groups.
    #[must_use]
    pub fn is_visible_to(&self, user: &User) -> bool {
        if user.role.is_admin() {
            return true;
        }
        self.active_group_ids.is_empty() || self.active_group_ids.contains(&user.group_id)
    }

    // --- workspace admins ---

    /// Grants a user workspace-scoped admin rights.
    pub fn grant_admin(&mut self, user: UserId) {
        self.admin_ids.insert(user);
    }

    /// Revokes workspace-scoped admin rights.
    pub fn revoke_admin(&mut self, user: UserId) {
        self.admin_ids.remove(&user);
    }

    /// Whether the user id is on the workspace admin list.
    ///
    /// This is the raw list membership; the access engine combines it
    /// with the global Admin role.
    #[must_use]
    pub fn lists_admin(&self, user: UserId) -> bool {
        self.admin_ids.contains(&user)
    }
}
