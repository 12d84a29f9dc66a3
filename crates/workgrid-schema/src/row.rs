//! Typed table rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use workgrid_types::{CellValue, RowId, RowStatus, UserId, WorkspaceId};

use crate::Workspace;

/// One row of workspace data.
///
/// The five meta fields (`id`, `status`, `owner_id`, `version`,
/// `updated_at`) are typed struct fields maintained by the mutation
/// engine; everything else lives in `cells`, a typed mapping keyed by
/// the owning workspace's column fields.
///
/// Invariants upheld by the mutation engine:
///
/// - `version` starts at 1 and increments by exactly one per accepted
///   batch that changed at least one field of this row.
/// - `updated_at` refreshes only on an actual accepted change.
///
/// The mutation methods here are building blocks for the engine; they
/// do not enforce permissions themselves. Callers outside the engine
/// should treat rows as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Unique identifier.
    pub id: RowId,
    /// The workspace this row belongs to.
    pub workspace_id: WorkspaceId,
    /// Lifecycle state.
    pub status: RowStatus,
    /// The user who created the row.
    pub owner_id: UserId,
    /// Revision counter, ≥ 1.
    pub version: u64,
    /// Timestamp of the last accepted change.
    pub updated_at: DateTime<Utc>,
    cells: BTreeMap<String, CellValue>,
}

impl TableRow {
    /// Creates a draft row with every schema column at its per-type
    /// default (numbers 0, dates today, text empty).
    #[must_use]
    pub fn draft(workspace: &Workspace, owner: UserId, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let cells = workspace
            .columns()
            .iter()
            .map(|col| {
                (
                    col.field.clone(),
                    CellValue::default_for(col.field_type, today),
                )
            })
            .collect();
        Self {
            id: RowId::new(),
            workspace_id: workspace.id,
            status: RowStatus::Draft,
            owner_id: owner,
            version: 1,
            updated_at: now,
            cells,
        }
    }

    /// The cell for a schema field, if set.
    #[must_use]
    pub fn cell(&self, field: &str) -> Option<&CellValue> {
        self.cells.get(field)
    }

    /// All cells, keyed by schema field.
    #[must_use]
    pub fn cells(&self) -> &BTreeMap<String, CellValue> {
        &self.cells
    }

    /// The stringified cell value; the empty string for an absent cell.
    ///
    /// Stringified values are the engine's change-detection currency:
    /// a proposed write is a no-op exactly when its stringified form
    /// equals this.
    #[must_use]
    pub fn cell_text(&self, field: &str) -> String {
        self.cells
            .get(field)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Sets a cell. Engine building block.
    pub fn set_cell(&mut self, field: impl Into<String>, value: CellValue) {
        self.cells.insert(field.into(), value);
    }

    /// Clears a cell; its stringified value becomes the empty string.
    /// Engine building block.
    pub fn clear_cell(&mut self, field: &str) {
        self.cells.remove(field);
    }

    /// Concludes an accepted batch on this row: one version increment,
    /// one timestamp refresh. Engine building block.
    pub fn commit_revision(&mut self, now: DateTime<Utc>) {
        self.version += 1;
        self.updated_at = now;
    }

    /// Case-insensitive substring search across the row's status and
    /// stringified cell values. An empty query matches everything.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        if self.status.to_string().to_lowercase().contains(&needle) {
            return true;
        }
        self.cells
            .values()
            .any(|v| v.to_string().to_lowercase().contains(&needle))
    }
}
