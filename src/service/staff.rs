//! Staff detection.
//!
//! Staff are exempt from creator detection and inactivity tracking. Which members count as
//! staff is a policy decision, so the tracker only asks a `StaffPolicy`.

use crate::model::member::MemberProfile;

pub trait StaffPolicy: Send + Sync {
    fn is_staff(&self, member: &MemberProfile) -> bool;
}

/// Administrators, plus anyone holding a role whose name contains one of the configured
/// staff names.
#[derive(Debug, Clone)]
pub struct RoleNameStaffPolicy {
    role_names: Vec<String>,
}

impl RoleNameStaffPolicy {
    pub fn new(role_names: Vec<String>) -> Self {
        Self { role_names }
    }
}

impl StaffPolicy for RoleNameStaffPolicy {
    fn is_staff(&self, member: &MemberProfile) -> bool {
        member.is_administrator
            || member.role_names.iter().any(|role| {
                self.role_names
                    .iter()
                    .any(|staff| role.contains(staff.as_str()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RoleNameStaffPolicy {
        RoleNameStaffPolicy::new(vec![
            "Admins".to_string(),
            "Moderator".to_string(),
            "Community Management".to_string(),
        ])
    }

    fn member(is_administrator: bool, roles: &[&str]) -> MemberProfile {
        MemberProfile {
            user_id: 1,
            is_administrator,
            role_names: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Tests that administrators are staff regardless of roles.
    ///
    /// Expected: true
    #[test]
    fn administrator_is_staff() {
        assert!(policy().is_staff(&member(true, &[])));
    }

    /// Tests substring matching on role names.
    ///
    /// Verifies that "Senior Moderator" matches the "Moderator" staff name.
    ///
    /// Expected: true
    #[test]
    fn role_name_substring_is_staff() {
        assert!(policy().is_staff(&member(false, &["Member", "Senior Moderator"])));
    }

    /// Tests that matching is case sensitive, as role names are compared verbatim.
    ///
    /// Expected: false
    #[test]
    fn matching_is_case_sensitive() {
        assert!(!policy().is_staff(&member(false, &["moderator"])));
    }

    /// Tests a regular member.
    ///
    /// Expected: false
    #[test]
    fn regular_member_is_not_staff() {
        assert!(!policy().is_staff(&member(false, &["Member", "Verified"])));
    }
}
