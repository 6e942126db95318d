//! Guild member facts needed to decide whether someone is staff.

/// The parts of a guild member the staff predicate looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub user_id: u64,
    /// Member is the guild owner or holds a role granting `ADMINISTRATOR`.
    pub is_administrator: bool,
    /// Human-readable names of every role the member holds.
    pub role_names: Vec<String>,
}
