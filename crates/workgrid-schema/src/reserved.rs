//! Reserved field names.
//!
//! Every row carries five engine-maintained fields alongside its
//! schema-defined cells. Column definitions may not reuse these names,
//! and the access engine answers for them specially: meta fields are
//! readable but never directly writable, while `status` is the
//! always-writable lifecycle channel.

/// The lifecycle field, writable by every user (the mutation engine
/// validates the value, not the writer).
pub const STATUS_FIELD: &str = "status";

/// Engine-maintained fields: visible, never directly editable.
pub const META_FIELDS: [&str; 4] = ["id", "updated_at", "owner_id", "version"];

/// Returns `true` for an engine-maintained meta field.
#[must_use]
pub fn is_meta_field(field: &str) -> bool {
    META_FIELDS.contains(&field)
}

/// Returns `true` for any name a column definition may not use.
#[must_use]
pub fn is_reserved_field(field: &str) -> bool {
    field == STATUS_FIELD || is_meta_field(field)
}
