//! Row lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a table row.
///
/// Rows are created as [`Draft`](Self::Draft), submitted for review as
/// [`Pending`](Self::Pending), and finish as [`Approved`](Self::Approved)
/// or [`Rejected`](Self::Rejected). The status gates column write access:
/// approved and rejected rows are locked for everyone except admins, and
/// drafts are writable only by their owner (see the access-control
/// engine's lifecycle lock).
///
/// # Example
///
/// ```
/// use workgrid_types::RowStatus;
///
/// let status: RowStatus = "Approved".parse().expect("known status");
/// assert!(status.is_locked());
/// assert_eq!(status.to_string(), "Approved");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowStatus {
    /// Being edited by its owner; not yet in review.
    #[default]
    Draft,
    /// Submitted; reviewers may still annotate fields their group can write.
    Pending,
    /// Review finished positively. Locked for non-admins.
    Approved,
    /// Review finished negatively. Locked for non-admins.
    Rejected,
}

impl RowStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Draft, Self::Pending, Self::Approved, Self::Rejected];

    /// Returns `true` once review has concluded (approved or rejected).
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Returns `true` while the row is a draft.
    #[must_use]
    pub fn is_draft(self) -> bool {
        matches!(self, Self::Draft)
    }
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for RowStatus {
    type Err = UnknownStatus;

    /// Parses a status spelling, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// Error for a string that names no [`RowStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown row status: '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_draft() {
        assert_eq!(RowStatus::default(), RowStatus::Draft);
    }

    #[test]
    fn locked_statuses() {
        assert!(RowStatus::Approved.is_locked());
        assert!(RowStatus::Rejected.is_locked());
        assert!(!RowStatus::Draft.is_locked());
        assert!(!RowStatus::Pending.is_locked());
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("draft".parse::<RowStatus>(), Ok(RowStatus::Draft));
        assert_eq!("PENDING".parse::<RowStatus>(), Ok(RowStatus::Pending));
        assert_eq!("Approved".parse::<RowStatus>(), Ok(RowStatus::Approved));
    }

    #[test]
    fn parse_unknown_is_error() {
        let err = "archived".parse::<RowStatus>().expect_err("unknown status");
        assert!(err.to_string().contains("archived"));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for status in RowStatus::ALL {
            assert_eq!(status.to_string().parse::<RowStatus>(), Ok(status));
        }
    }
}
