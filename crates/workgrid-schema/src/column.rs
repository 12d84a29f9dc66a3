//! Column definitions and their permission maps.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use workgrid_types::{AccessLevel, FieldType, GroupId};

/// One typed column of a workspace schema.
///
/// The permission map is keyed by role group: a group absent from the
/// map has [`AccessLevel::None`] on the column. The map expresses the
/// *base* permission only — the access engine may still downgrade a
/// `Write` to `Read` depending on the row's lifecycle state.
///
/// # Example
///
/// ```
/// use workgrid_schema::ColumnSpec;
/// use workgrid_types::{AccessLevel, FieldType, GroupId};
///
/// let submitters = GroupId::new();
/// let reviewers = GroupId::new();
/// let amount = ColumnSpec::new("amount", "Amount", FieldType::Number)
///     .sensitive()
///     .permit(submitters, AccessLevel::Write)
///     .permit(reviewers, AccessLevel::Read);
///
/// assert_eq!(amount.permission_for(submitters), AccessLevel::Write);
/// assert_eq!(amount.permission_for(GroupId::new()), AccessLevel::None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Unique key within the workspace.
    pub field: String,
    /// Display label.
    pub label: String,
    /// Data type of the column's cells.
    pub field_type: FieldType,
    /// Candidate values for select columns (display hint; not enforced).
    pub options: Vec<String>,
    /// Marks values frontends should mask for read-only viewers.
    pub is_sensitive: bool,
    /// Base permission per role group. Absent group ⇒ no access.
    pub group_permissions: HashMap<GroupId, AccessLevel>,
}

impl ColumnSpec {
    /// Creates a column with an empty permission map.
    #[must_use]
    pub fn new(field: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
            is_sensitive: false,
            group_permissions: HashMap::new(),
        }
    }

    /// Sets the select options (builder form).
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the column sensitive (builder form).
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.is_sensitive = true;
        self
    }

    /// Grants a group a base permission (builder form).
    #[must_use]
    pub fn permit(mut self, group: GroupId, level: AccessLevel) -> Self {
        self.group_permissions.insert(group, level);
        self
    }

    /// The base permission configured for a group.
    ///
    /// Groups not in the map (including deleted groups that users still
    /// point at) get [`AccessLevel::None`].
    #[must_use]
    pub fn permission_for(&self, group: GroupId) -> AccessLevel {
        self.group_permissions
            .get(&group)
            .copied()
            .unwrap_or(AccessLevel::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_group_gets_none() {
        let col = ColumnSpec::new("title", "Title", FieldType::Text);
        assert_eq!(col.permission_for(GroupId::new()), AccessLevel::None);
    }

    #[test]
    fn permit_sets_base_permission() {
        let g = GroupId::new();
        let col = ColumnSpec::new("title", "Title", FieldType::Text).permit(g, AccessLevel::Write);
        assert_eq!(col.permission_for(g), AccessLevel::Write);
    }

    #[test]
    fn builder_options_and_sensitivity() {
        let col = ColumnSpec::new("category", "Category", FieldType::Select)
            .with_options(["travel", "office"])
            .sensitive();
        assert_eq!(col.options, vec!["travel", "office"]);
        assert!(col.is_sensitive);
    }
}
