//! Well-known role name constants embedded in access tokens.

pub const ROLE_STUDENT: &str = "student";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_ADMIN: &str = "admin";

/// Whether `role` may use the manager portal. Admins inherit manager access.
pub fn is_staff(role: &str) -> bool {
    role == ROLE_MANAGER || role == ROLE_ADMIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_manager_are_staff() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_MANAGER));
        assert!(!is_staff(ROLE_STUDENT));
        assert!(!is_staff(""));
    }
}
