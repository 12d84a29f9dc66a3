//! Workspace schemas and typed rows for workgrid.
//!
//! A [`Workspace`] is a business process: a validated list of typed
//! [`ColumnSpec`]s, each carrying a per-group permission map, plus
//! group-level visibility and a workspace-admin list. A [`TableRow`] is
//! an instance of that schema — typed meta fields plus a typed cell per
//! column.
//!
//! This crate is consumed read-only by `workgrid-auth` (decisions) and
//! `workgrid-engine` (mutations); schema changes go through the explicit
//! update operations on [`Workspace`].

mod column;
mod reserved;
mod row;
mod workspace;

pub use column::ColumnSpec;
pub use reserved::{META_FIELDS, STATUS_FIELD, is_meta_field, is_reserved_field};
pub use row::TableRow;
pub use workspace::{SchemaError, Workspace};
