//! User and role-group directory for workgrid.
//!
//! Reference data for the layers above: who exists ([`User`]), which
//! cohorts they belong to ([`RoleGroup`]), and who reports to whom
//! (resolved by [`subordinates_of`]). The [`Directory`] owns the
//! collections and exposes the only mutation operations.
//!
//! Identity is always passed explicitly into decision functions — there
//! is no ambient "current user" anywhere in the engine; selecting the
//! acting user is the embedding application's concern.

mod directory;
mod group;
mod hierarchy;
mod user;

pub use directory::{Directory, DirectoryError};
pub use group::RoleGroup;
pub use hierarchy::subordinates_of;
pub use user::User;
