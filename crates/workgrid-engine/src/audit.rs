//! Append-only audit trail.
//!
//! Every accepted cell change produces one [`AuditEntry`]; the log is
//! written exclusively by the batch engine and never mutated or
//! truncated afterwards. Values are recorded stringified — the same
//! currency the engine uses for change detection — so the trail reads
//! uniformly regardless of column type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use workgrid_types::{EntryId, RowId, WorkspaceId};

/// One accepted cell change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// The row that changed.
    pub row_id: RowId,
    /// The workspace the row belongs to.
    pub workspace_id: WorkspaceId,
    /// Display name of the acting user at the time of the change.
    pub operator_name: String,
    /// The field that changed (schema field or `status`).
    pub field: String,
    /// Stringified value before the change.
    pub old_value: String,
    /// Stringified value after the change.
    pub new_value: String,
    /// When the change was accepted.
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub(crate) fn new(
        row_id: RowId,
        workspace_id: WorkspaceId,
        operator_name: impl Into<String>,
        field: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            row_id,
            workspace_id,
            operator_name: operator_name.into(),
            field: field.into(),
            old_value: old_value.into(),
            new_value: new_value.into(),
            timestamp,
        }
    }
}

/// The append-only collection of [`AuditEntry`] records.
///
/// Unbounded on purpose: the audit contract is "never deleted by the
/// core", so there is no rolling-buffer eviction here. Hosts that need
/// retention policies apply them outside the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: AuditEntry) {
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Entries for one row, newest first (the order an audit viewer
    /// shows them in).
    #[must_use]
    pub fn for_row(&self, row_id: RowId) -> Vec<&AuditEntry> {
        let mut matching: Vec<&AuditEntry> = self
            .entries
            .iter()
            .filter(|e| e.row_id == row_id)
            .collect();
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matching
    }

    /// Entries for one workspace, oldest first.
    #[must_use]
    pub fn for_workspace(&self, workspace_id: WorkspaceId) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.workspace_id == workspace_id)
            .collect()
    }

    /// The most recent `n` entries as JSON values.
    ///
    /// Entries that fail serialization are silently skipped.
    #[must_use]
    pub fn recent_as_json(&self, n: usize) -> Vec<serde_json::Value> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries
            .iter()
            .skip(skip)
            .filter_map(|e| serde_json::to_value(e).ok())
            .collect()
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entry has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(row: RowId, ws: WorkspaceId, at: DateTime<Utc>, field: &str) -> AuditEntry {
        AuditEntry::new(row, ws, "op", field, "old", "new", at)
    }

    #[test]
    fn new_log_is_empty() {
        let log = AuditLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn append_preserves_order() {
        let mut log = AuditLog::new();
        let row = RowId::new();
        let ws = WorkspaceId::new();
        let t0 = Utc::now();
        log.append(entry(row, ws, t0, "a"));
        log.append(entry(row, ws, t0 + Duration::seconds(1), "b"));

        let fields: Vec<&str> = log.entries().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn for_row_newest_first() {
        let mut log = AuditLog::new();
        let row = RowId::new();
        let other = RowId::new();
        let ws = WorkspaceId::new();
        let t0 = Utc::now();
        log.append(entry(row, ws, t0, "first"));
        log.append(entry(other, ws, t0 + Duration::seconds(1), "noise"));
        log.append(entry(row, ws, t0 + Duration::seconds(2), "second"));

        let trail = log.for_row(row);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].field, "second");
        assert_eq!(trail[1].field, "first");
    }

    #[test]
    fn for_workspace_filters() {
        let mut log = AuditLog::new();
        let ws_a = WorkspaceId::new();
        let ws_b = WorkspaceId::new();
        let t0 = Utc::now();
        log.append(entry(RowId::new(), ws_a, t0, "a"));
        log.append(entry(RowId::new(), ws_b, t0, "b"));

        assert_eq!(log.for_workspace(ws_a).len(), 1);
        assert_eq!(log.for_workspace(ws_b).len(), 1);
    }

    #[test]
    fn recent_as_json_takes_tail() {
        let mut log = AuditLog::new();
        let ws = WorkspaceId::new();
        let t0 = Utc::now();
        for field in ["a", "b", "c"] {
            log.append(entry(RowId::new(), ws, t0, field));
        }

        let json = log.recent_as_json(2);
        assert_eq!(json.len(), 2);
        assert_eq!(json[0]["field"], "b");
        assert_eq!(json[1]["field"], "c");
    }
}
