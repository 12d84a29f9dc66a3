//! Batch mutation engine for workgrid.
//!
//! The top of the workspace's dependency graph: owns the row and audit
//! collections ([`Grid`]) and is the only writer of both. Proposed
//! edits from any source — direct cell edits, clipboard-matrix
//! expansion, spreadsheet ingestion — are normalized into
//! [`CellWrite`]s and flow through [`Grid::apply_batch`], which
//! re-derives access per write at apply time and reports denials as a
//! skip count rather than an error.
//!
//! ```text
//! proposed edits ──► apply_batch ──► column_access per write (workgrid-auth)
//!                        │
//!            accepted ───┤─── denied/malformed → skipped count
//!                        ▼
//!              row cells + one version bump per row
//!                        ▼
//!              audit entries (append-only)
//! ```
//!
//! # Example
//!
//! ```
//! use workgrid_directory::{Directory, RoleGroup, User};
//! use workgrid_engine::{CellWrite, Grid};
//! use workgrid_schema::{ColumnSpec, Workspace};
//! use workgrid_types::{AccessLevel, CellValue, FieldType, SystemRole};
//!
//! let mut dir = Directory::new();
//! let group = RoleGroup::new("General", "blue");
//! let group_id = group.id;
//! dir.add_group(group).expect("fresh group");
//! let user = User::new("Ada", SystemRole::Member, group_id);
//! dir.add_user(user.clone()).expect("fresh user");
//!
//! let mut ws = Workspace::new("Expenses", "calculator");
//! ws.add_column(
//!     ColumnSpec::new("title", "Title", FieldType::Text).permit(group_id, AccessLevel::Write),
//! )
//! .expect("fresh field");
//!
//! let mut grid = Grid::new();
//! let row = grid.create_draft(&user, &ws);
//! let outcome = grid.apply_batch(
//!     &[CellWrite::new(row, "title", CellValue::Text("Q1 travel".into()))],
//!     &user,
//!     &ws,
//! );
//!
//! assert_eq!(outcome.applied, 1);
//! assert_eq!(grid.row(row).expect("present").version, 2);
//! assert_eq!(grid.audit().len(), 1);
//! ```

mod audit;
mod batch;
mod grid;

pub use audit::{AuditEntry, AuditLog};
pub use batch::{BatchOutcome, CellWrite};
pub use grid::{Grid, ImportError, SharedGrid, shared_grid};
