//! The grid: row collection plus audit log.
//!
//! The [`Grid`] owns both collections the mutation engine writes, so a
//! batch mutates rows and appends audit entries under one `&mut` — a
//! multi-threaded host wraps the grid in [`SharedGrid`] and one write
//! lock per batch preserves the one-version-bump-per-batch invariant.

use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use workgrid_auth::can_view_row_in_workspace;
use workgrid_directory::{Directory, User};
use workgrid_schema::{TableRow, Workspace};
use workgrid_types::{CellValue, ErrorCode, RowId, RowStatus, WorkspaceId};

use crate::{AuditLog, BatchOutcome, CellWrite};

/// Error from an atomic record import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A record's value does not parse for its column's type.
    ///
    /// Nothing is committed: the import either succeeds whole or not
    /// at all.
    #[error("record {record}: value '{value}' does not parse for column '{field}'")]
    BadCell {
        /// Zero-based index of the offending record.
        record: usize,
        /// The column field the value was destined for.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

impl ErrorCode for ImportError {
    fn code(&self) -> &'static str {
        match self {
            Self::BadCell { .. } => "IMPORT_BAD_CELL",
        }
    }

    fn is_recoverable(&self) -> bool {
        true
    }
}

/// The in-memory row store and its audit trail.
///
/// Rows across all workspaces live in one collection, newest first
/// (creation and import insert at the front). All mutation goes through
/// [`apply_batch`](Self::apply_batch) and the creation/import
/// operations here; everything else is a read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) rows: Vec<TableRow>,
    pub(crate) audit: AuditLog,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- creation & import ---

    /// Creates a draft row owned by `actor`, pre-filled with each
    /// column's per-type default, and returns its id.
    ///
    /// The new row lands at the front of the collection.
    pub fn create_draft(&mut self, actor: &User, workspace: &Workspace) -> RowId {
        let row = TableRow::draft(workspace, actor.id, Utc::now());
        let id = row.id;
        debug!(row = %id, workspace = %workspace.id, owner = %actor.id, "draft created");
        self.rows.insert(0, row);
        id
    }

    /// Imports records as draft rows owned by `actor`, atomically.
    ///
    /// Each record maps column labels (preferred) or field keys to raw
    /// text. Absent or blank values take the column's per-type default;
    /// present values must parse for the column type.
    ///
    /// Returns the number of rows imported. On error nothing is
    /// committed — partial imports never happen.
    ///
    /// # Errors
    ///
    /// [`ImportError::BadCell`] for the first value that fails to parse.
    pub fn import_records(
        &mut self,
        actor: &User,
        workspace: &Workspace,
        records: &[BTreeMap<String, String>],
    ) -> Result<usize, ImportError> {
        let now = Utc::now();
        let mut imported: Vec<TableRow> = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let mut row = TableRow::draft(workspace, actor.id, now);
            for column in workspace.columns() {
                let raw = record
                    .get(&column.label)
                    .or_else(|| record.get(&column.field));
                let Some(raw) = raw else { continue };
                if raw.trim().is_empty() {
                    continue; // keep the per-type default
                }
                let value = CellValue::parse(column.field_type, raw).ok_or_else(|| {
                    ImportError::BadCell {
                        record: index,
                        field: column.field.clone(),
                        value: raw.clone(),
                    }
                })?;
                row.set_cell(column.field.clone(), value);
            }
            imported.push(row);
        }

        let count = imported.len();
        info!(count, workspace = %workspace.id, owner = %actor.id, "records imported");
        self.rows.splice(0..0, imported);
        Ok(count)
    }

    /// Submits every draft row owned by `actor` in this workspace for
    /// review.
    ///
    /// Expressed as `status → Pending` writes through
    /// [`apply_batch`](Self::apply_batch), so submitted rows get the
    /// same audit entries and version bumps as any other mutation.
    pub fn submit_drafts(&mut self, actor: &User, workspace: &Workspace) -> BatchOutcome {
        let writes: Vec<CellWrite> = self
            .rows
            .iter()
            .filter(|r| {
                r.workspace_id == workspace.id
                    && r.owner_id == actor.id
                    && r.status.is_draft()
            })
            .map(|r| CellWrite::set_status(r.id, RowStatus::Pending))
            .collect();
        self.apply_batch(&writes, actor, workspace)
    }

    // --- queries ---

    /// All rows, newest first, across all workspaces.
    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Looks up a row by id.
    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Rows belonging to one workspace, in storage order.
    pub fn rows_in(&self, workspace_id: WorkspaceId) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |r| r.workspace_id == workspace_id)
    }

    /// The workspace's rows the actor may see, filtered by a
    /// case-insensitive substring search (empty query matches all).
    #[must_use]
    pub fn visible_rows<'a>(
        &'a self,
        actor: &User,
        workspace: &Workspace,
        directory: &Directory,
        query: &str,
    ) -> Vec<&'a TableRow> {
        self.rows
            .iter()
            .filter(|r| r.workspace_id == workspace.id)
            .filter(|r| can_view_row_in_workspace(actor, r, directory, workspace))
            .filter(|r| r.matches_search(query))
            .collect()
    }

    /// The audit trail.
    #[must_use]
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }
}

/// Thread-safe shared grid handle.
///
/// One write-lock acquisition spans an entire batch, serializing
/// batches against each other.
pub type SharedGrid = Arc<RwLock<Grid>>;

/// Creates a new empty [`SharedGrid`].
#[must_use]
pub fn shared_grid() -> SharedGrid {
    Arc::new(RwLock::new(Grid::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use workgrid_schema::ColumnSpec;
    use workgrid_types::{FieldType, GroupId, SystemRole, assert_error_code};

    fn workspace() -> Workspace {
        let mut ws = Workspace::new("Expenses", "calculator");
        ws.add_column(ColumnSpec::new("title", "Title", FieldType::Text))
            .expect("fresh field");
        ws.add_column(ColumnSpec::new("amount", "Amount", FieldType::Number))
            .expect("fresh field");
        ws
    }

    fn actor() -> User {
        User::new("Ada", SystemRole::Member, GroupId::new())
    }

    #[test]
    fn create_draft_inserts_at_front() {
        let ws = workspace();
        let user = actor();
        let mut grid = Grid::new();
        let first = grid.create_draft(&user, &ws);
        let second = grid.create_draft(&user, &ws);

        assert_eq!(grid.rows()[0].id, second);
        assert_eq!(grid.rows()[1].id, first);
        assert_eq!(grid.row(first).expect("present").version, 1);
    }

    #[test]
    fn import_parses_by_label_then_field() {
        let ws = workspace();
        let user = actor();
        let mut grid = Grid::new();

        let record = BTreeMap::from([
            ("Title".to_string(), "trip".to_string()),
            ("amount".to_string(), "120".to_string()),
        ]);
        let count = grid
            .import_records(&user, &ws, &[record])
            .expect("clean import");

        assert_eq!(count, 1);
        let row = &grid.rows()[0];
        assert_eq!(row.cell_text("title"), "trip");
        assert_eq!(row.cell_text("amount"), "120");
        assert_eq!(row.status, RowStatus::Draft);
        assert_eq!(row.owner_id, user.id);
    }

    #[test]
    fn import_blank_value_keeps_default() {
        let ws = workspace();
        let user = actor();
        let mut grid = Grid::new();

        let record = BTreeMap::from([("Amount".to_string(), "  ".to_string())]);
        grid.import_records(&user, &ws, &[record]).expect("clean");
        assert_eq!(grid.rows()[0].cell_text("amount"), "0");
    }

    #[test]
    fn import_is_atomic() {
        let ws = workspace();
        let user = actor();
        let mut grid = Grid::new();

        let good = BTreeMap::from([("Amount".to_string(), "120".to_string())]);
        let bad = BTreeMap::from([("Amount".to_string(), "twelve".to_string())]);

        let err = grid
            .import_records(&user, &ws, &[good, bad])
            .expect_err("malformed record");
        assert!(matches!(err, ImportError::BadCell { record: 1, .. }));
        // The parseable first record was not committed either.
        assert!(grid.rows().is_empty());
    }

    #[test]
    fn import_error_code() {
        assert_error_code(
            &ImportError::BadCell {
                record: 0,
                field: "amount".into(),
                value: "x".into(),
            },
            "IMPORT_",
        );
    }

    #[test]
    fn rows_in_filters_by_workspace() {
        let ws_a = workspace();
        let ws_b = workspace();
        let user = actor();
        let mut grid = Grid::new();
        grid.create_draft(&user, &ws_a);
        grid.create_draft(&user, &ws_b);

        assert_eq!(grid.rows_in(ws_a.id).count(), 1);
        assert_eq!(grid.rows_in(ws_b.id).count(), 1);
    }

    #[test]
    fn shared_grid_handle() {
        let shared = shared_grid();
        let ws = workspace();
        let user = actor();
        {
            let mut grid = shared.write();
            grid.create_draft(&user, &ws);
        }
        assert_eq!(shared.read().rows().len(), 1);
    }
}
