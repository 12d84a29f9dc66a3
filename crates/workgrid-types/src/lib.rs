//! Vocabulary types for the workgrid engine.
//!
//! This crate is the bottom of the workspace's dependency graph:
//!
//! ```text
//! workgrid-types      : ids, roles, statuses, access levels, cell values  ◄── HERE
//!        ↑
//! workgrid-directory  : User, RoleGroup, Directory, subordinate resolver
//!        ↑
//! workgrid-schema     : ColumnSpec, Workspace, TableRow
//!        ↑
//! workgrid-auth       : row visibility + column access decisions
//!        ↑
//! workgrid-engine     : Grid, batch mutation engine, audit log
//! ```
//!
//! Everything here is pure data: no collection ownership, no decision
//! logic. Identity (who), vocabulary (what kinds of value), and the
//! result alphabets the upper layers speak ([`AccessLevel`],
//! [`RowStatus`]).
//!
//! # Example
//!
//! ```
//! use workgrid_types::{AccessLevel, CellValue, FieldType, RowStatus, SystemRole, UserId};
//!
//! let owner = UserId::new();
//! let role = SystemRole::Member;
//! let status: RowStatus = "Pending".parse().expect("known status");
//! let amount = CellValue::parse(FieldType::Number, "15200").expect("numeric");
//!
//! assert!(!role.is_admin());
//! assert!(!status.is_locked());
//! assert_eq!(amount.to_string(), "15200");
//! assert!(AccessLevel::Write > AccessLevel::Read);
//! # let _ = owner;
//! ```

mod access;
mod error;
mod id;
mod role;
mod status;
mod value;

pub use access::AccessLevel;
pub use error::{ErrorCode, assert_error_code};
pub use id::{EntryId, GroupId, RowId, UserId, WorkspaceId};
pub use role::SystemRole;
pub use status::{RowStatus, UnknownStatus};
pub use value::{CellValue, FieldType};
