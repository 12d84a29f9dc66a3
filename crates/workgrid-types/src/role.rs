//! System role (coarse capability tier).
//!
//! The system role is orthogonal to group membership: groups drive
//! column-level access through permission maps, while the role decides
//! the coarse tier — admins bypass every check, leaders additionally see
//! their reporting chain's rows.

use serde::{Deserialize, Serialize};

/// Coarse capability tier of a user.
///
/// | Role | Effect |
/// |------|--------|
/// | [`Member`](Self::Member) | Sees own rows only; column access per group map |
/// | [`Leader`](Self::Leader) | Additionally sees rows owned by transitive subordinates |
/// | [`Admin`](Self::Admin) | Bypasses all row and column checks unconditionally |
///
/// # Example
///
/// ```
/// use workgrid_types::SystemRole;
///
/// assert!(SystemRole::Admin.is_admin());
/// assert!(!SystemRole::Member.is_leader());
/// assert_eq!(SystemRole::parse("leader"), Some(SystemRole::Leader));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemRole {
    /// Regular user. The default for new directory entries.
    #[default]
    Member,
    /// Manager: sees every row owned by a transitive subordinate.
    Leader,
    /// Super user: every row visible, every column writable.
    Admin,
}

impl SystemRole {
    /// Returns `true` for [`SystemRole::Admin`].
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns `true` for [`SystemRole::Leader`].
    #[must_use]
    pub fn is_leader(self) -> bool {
        matches!(self, Self::Leader)
    }

    /// Parses a role name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use workgrid_types::SystemRole;
    ///
    /// assert_eq!(SystemRole::parse("ADMIN"), Some(SystemRole::Admin));
    /// assert_eq!(SystemRole::parse("Member"), Some(SystemRole::Member));
    /// assert_eq!(SystemRole::parse("intern"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "MEMBER" => Some(Self::Member),
            "LEADER" => Some(Self::Leader),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Member => "MEMBER",
            Self::Leader => "LEADER",
            Self::Admin => "ADMIN",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_member() {
        assert_eq!(SystemRole::default(), SystemRole::Member);
    }

    #[test]
    fn predicates() {
        assert!(SystemRole::Admin.is_admin());
        assert!(!SystemRole::Admin.is_leader());
        assert!(SystemRole::Leader.is_leader());
        assert!(!SystemRole::Member.is_admin());
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(SystemRole::parse("member"), Some(SystemRole::Member));
        assert_eq!(SystemRole::parse("Leader"), Some(SystemRole::Leader));
        assert_eq!(SystemRole::parse("ADMIN"), Some(SystemRole::Admin));
        assert_eq!(SystemRole::parse(""), None);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for role in [SystemRole::Member, SystemRole::Leader, SystemRole::Admin] {
            assert_eq!(SystemRole::parse(&role.to_string()), Some(role));
        }
    }
}
