//! The batch cell-mutation engine.
//!
//! All row mutation flows through [`Grid::apply_batch`]: direct cell
//! edits, clipboard-matrix expansion, and lifecycle submission all
//! normalize to a list of [`CellWrite`]s first. Access is re-derived
//! per write at apply time — a permission result computed at render
//! time is never trusted, so revoking access between render and apply
//! cannot be exploited.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use workgrid_auth::column_access;
use workgrid_directory::User;
use workgrid_schema::{STATUS_FIELD, Workspace, is_meta_field};
use workgrid_types::{CellValue, RowId, RowStatus};

use crate::{AuditEntry, Grid};

/// One proposed cell write.
///
/// The normalized shape every edit source reduces to before reaching
/// the engine. The value may arrive as raw text (clipboard, import);
/// the engine coerces it to the column's type at apply time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellWrite {
    /// The row to write to.
    pub row_id: RowId,
    /// The field to write (a schema field or `status`).
    pub field: String,
    /// The proposed value.
    pub value: CellValue,
}

impl CellWrite {
    /// Creates a proposed write.
    #[must_use]
    pub fn new(row_id: RowId, field: impl Into<String>, value: CellValue) -> Self {
        Self {
            row_id,
            field: field.into(),
            value,
        }
    }

    /// A write that clears the cell (empty text).
    #[must_use]
    pub fn clear(row_id: RowId, field: impl Into<String>) -> Self {
        Self::new(row_id, field, CellValue::Text(String::new()))
    }

    /// A lifecycle transition expressed as a status write.
    #[must_use]
    pub fn set_status(row_id: RowId, status: RowStatus) -> Self {
        Self::new(row_id, STATUS_FIELD, CellValue::Text(status.to_string()))
    }
}

/// Aggregate result of one batch.
///
/// Permission denial is a normal outcome, not an error: denied and
/// malformed writes land in `skipped`, accepted changes in `applied`,
/// and writes equal to the current value in neither (pure no-ops).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Writes that changed a cell (or the status) and were audited.
    pub applied: usize,
    /// Writes discarded for insufficient access or a malformed value.
    pub skipped: usize,
}

impl std::fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} applied, {} skipped", self.applied, self.skipped)
    }
}

impl Grid {
    /// Applies a batch of proposed writes for one acting user.
    ///
    /// Per touched row (rows iterated in storage order, writes in
    /// proposal order):
    ///
    /// - Access is re-derived per write via
    ///   [`column_access`] against a snapshot of the row taken before
    ///   the batch touched it, so writes earlier in the batch cannot
    ///   change the access of later ones. Non-`Write` access skips the
    ///   write silently.
    /// - A `status` write is parsed as a [`RowStatus`]
    ///   (case-insensitive); an unparsable value is skipped.
    /// - Writes to the engine-maintained meta fields are skipped even
    ///   when access reported `Write` (the admin case): `version` and
    ///   `updated_at` belong to the engine.
    /// - A schema-field value is coerced to the column type; coercion
    ///   failure is skipped. An empty stringified value clears the cell.
    /// - Change detection compares stringified old and new values: an
    ///   equal write is a pure no-op — no audit entry, no counter.
    /// - A row changed by at least one write gets exactly one version
    ///   increment and one `updated_at` refresh for the whole batch.
    ///
    /// Writes addressing an unknown row id are dropped without touching
    /// either counter. The method never fails: permission denial is
    /// reported through [`BatchOutcome::skipped`].
    pub fn apply_batch(
        &mut self,
        updates: &[CellWrite],
        actor: &User,
        workspace: &Workspace,
    ) -> BatchOutcome {
        let now = Utc::now();
        let mut outcome = BatchOutcome::default();
        let mut entries: Vec<AuditEntry> = Vec::new();

        for row in &mut self.rows {
            let row_updates: Vec<&CellWrite> =
                updates.iter().filter(|u| u.row_id == row.id).collect();
            if row_updates.is_empty() {
                continue;
            }

            // Access checks see the row as it was when the batch began.
            let before = row.clone();
            let mut changed = false;

            for update in row_updates {
                let access = column_access(actor, &before, &update.field, workspace);
                if !access.can_write() {
                    debug!(
                        row = %row.id,
                        field = %update.field,
                        %access,
                        "write skipped: insufficient access"
                    );
                    outcome.skipped += 1;
                    continue;
                }

                if update.field == STATUS_FIELD {
                    match update.value.to_string().parse::<RowStatus>() {
                        Ok(next) => {
                            if next != row.status {
                                entries.push(AuditEntry::new(
                                    row.id,
                                    row.workspace_id,
                                    actor.name.clone(),
                                    STATUS_FIELD,
                                    row.status.to_string(),
                                    next.to_string(),
                                    now,
                                ));
                                row.status = next;
                                changed = true;
                                outcome.applied += 1;
                            }
                        }
                        Err(err) => {
                            warn!(row = %row.id, %err, "write skipped: not a status");
                            outcome.skipped += 1;
                        }
                    }
                    continue;
                }

                if is_meta_field(&update.field) {
                    debug!(
                        row = %row.id,
                        field = %update.field,
                        "write skipped: engine-maintained field"
                    );
                    outcome.skipped += 1;
                    continue;
                }

                let Some(column) = workspace.column(&update.field) else {
                    // Only reachable for admins: everyone else already
                    // got AccessLevel::None for an undeclared field.
                    debug!(
                        row = %row.id,
                        field = %update.field,
                        "write skipped: field not in schema"
                    );
                    outcome.skipped += 1;
                    continue;
                };

                let old_text = row.cell_text(&update.field);
                let raw_text = update.value.to_string();

                if raw_text.is_empty() {
                    if !old_text.is_empty() {
                        entries.push(AuditEntry::new(
                            row.id,
                            row.workspace_id,
                            actor.name.clone(),
                            update.field.clone(),
                            old_text,
                            String::new(),
                            now,
                        ));
                        row.clear_cell(&update.field);
                        changed = true;
                        outcome.applied += 1;
                    }
                    continue;
                }

                let Some(value) = update.value.conform_to(column.field_type) else {
                    warn!(
                        row = %row.id,
                        field = %update.field,
                        column_type = %column.field_type,
                        "write skipped: value does not fit column type"
                    );
                    outcome.skipped += 1;
                    continue;
                };

                let new_text = value.to_string();
                if new_text != old_text {
                    entries.push(AuditEntry::new(
                        row.id,
                        row.workspace_id,
                        actor.name.clone(),
                        update.field.clone(),
                        old_text,
                        new_text,
                        now,
                    ));
                    row.set_cell(update.field.clone(), value);
                    changed = true;
                    outcome.applied += 1;
                }
            }

            if changed {
                row.commit_revision(now);
            }
        }

        for entry in entries {
            self.audit.append(entry);
        }

        if outcome.skipped > 0 {
            info!(
                applied = outcome.applied,
                skipped = outcome.skipped,
                operator = %actor.name,
                "batch finished with skipped writes"
            );
        } else if outcome.applied > 0 {
            debug!(applied = outcome.applied, operator = %actor.name, "batch applied");
        }

        outcome
    }
}
