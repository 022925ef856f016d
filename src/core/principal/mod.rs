mod role;
pub use role::Role;

mod user;
pub use user::User;

use crate::common::Time;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(User),
}

impl Principal {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::User(_))
    }

    // Role is absent for anonymous principals and users without an assigned role.
    pub fn role(&self) -> Option<Role> {
        match self {
            Principal::Anonymous => None,
            Principal::User(user) => user.role,
        }
    }

    pub fn is_expired(&self, now: Time) -> bool {
        match self {
            Principal::Anonymous => false,
            Principal::User(user) => user.is_expired(now),
        }
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Principal::User(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn anonymous_has_no_role() {
        assert!(!Principal::Anonymous.is_authenticated());
        assert_eq!(Principal::Anonymous.role(), None);
    }

    #[test]
    fn user_without_role() {
        let principal = Principal::from(User::new("u1", "Sara", None));
        assert!(principal.is_authenticated());
        assert_eq!(principal.role(), None);
    }

    #[test]
    fn expiry_is_inclusive() {
        let expires_at = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let principal =
            Principal::from(User::new("u1", "Sara", Some(Role::Student)).with_expiry(expires_at));

        assert!(!principal.is_expired(expires_at - chrono::Duration::seconds(1)));
        assert!(principal.is_expired(expires_at));
        assert!(!Principal::Anonymous.is_expired(expires_at));
    }
}
