use std::fmt;

use crate::common::Time;
use crate::core::principal::Role;

// Authenticated user established from a credential token.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Option<Role>,
    // Expiry of the token this user was resolved from.
    pub expires_at: Option<Time>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: Time) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn is_expired(&self, now: Time) -> bool {
        self.expires_at.map_or(false, |expires_at| expires_at <= now)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("role", &self.role)
            .finish()
    }
}
