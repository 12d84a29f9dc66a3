//! Subordinate resolution over manager links.
//!
//! Manager links point upward (`user.manager_id` → their manager), so
//! resolving "everyone under this leader" means walking the links
//! backward. The walk is an explicit breadth-first traversal over a
//! children adjacency map with a visited set: a cyclic management graph
//! (possible after careless directory imports) terminates cleanly
//! instead of recursing forever.

use std::collections::{HashMap, HashSet, VecDeque};
use workgrid_types::UserId;

use crate::User;

/// Returns every user transitively managed by `leader`.
///
/// The leader themself is not included. Ordering is unspecified; the
/// result is only ever used for membership tests. Users inside a
/// management cycle reachable from the leader are reported once.
///
/// # Example
///
/// ```
/// use workgrid_directory::{subordinates_of, User};
/// use workgrid_types::{GroupId, SystemRole};
///
/// let g = GroupId::new();
/// let lead = User::new("L", SystemRole::Leader, g);
/// let mid = User::new("M1", SystemRole::Member, g).reporting_to(lead.id);
/// let leaf = User::new("M2", SystemRole::Member, g).reporting_to(mid.id);
///
/// let subs = subordinates_of(&[lead.clone(), mid.clone(), leaf.clone()], lead.id);
/// assert!(subs.contains(&mid.id));
/// assert!(subs.contains(&leaf.id)); // transitive
/// assert!(!subs.contains(&lead.id));
/// ```
#[must_use]
pub fn subordinates_of(users: &[User], leader: UserId) -> HashSet<UserId> {
    // Adjacency is rebuilt per query; directories are small and the
    // alternative (a cached index) would have to be invalidated on every
    // directory edit.
    let mut reports: HashMap<UserId, Vec<UserId>> = HashMap::new();
    for user in users {
        if let Some(manager) = user.manager_id {
            reports.entry(manager).or_default().push(user.id);
        }
    }

    let mut visited: HashSet<UserId> = HashSet::new();
    let mut queue: VecDeque<UserId> = VecDeque::from([leader]);
    while let Some(current) = queue.pop_front() {
        for &report in reports.get(&current).into_iter().flatten() {
            if visited.insert(report) {
                queue.push_back(report);
            }
        }
    }

    // A cycle through the leader would have marked the leader visited.
    visited.remove(&leader);
    visited
}
