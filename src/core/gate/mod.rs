//! Role-gated access decisions.
//!
//! The gate is a pure function of the current [`AuthState`] snapshot, the
//! destination's [`Policy`] and the requested path. It performs no I/O and
//! keeps no state between calls.

mod decision;
pub use decision::Decision;

mod requirement;
pub use requirement::{Policy, RouteRequirement};

use serde::Deserialize;

use crate::core::AuthState;

/// How a protected destination with an empty allow-list treats roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyRoles {
    /// Any authenticated principal passes the role check.
    #[default]
    AllowAny,
    /// No principal passes the role check.
    DenyAll,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Gate {
    empty_roles: EmptyRoles,
}

impl Gate {
    pub fn new(empty_roles: EmptyRoles) -> Self {
        Self { empty_roles }
    }

    pub fn empty_roles(&self) -> EmptyRoles {
        self.empty_roles
    }

    /// Decide whether the principal in `state` may view a destination.
    ///
    /// Authentication is checked before roles, so an unauthenticated principal
    /// is always sent to login rather than to the unauthorized page.
    pub fn decide(&self, state: &AuthState, policy: &Policy, current_path: &str) -> Decision {
        if state.is_pending() {
            return Decision::Pending;
        }
        let authenticated = state.is_authenticated();

        match policy {
            Policy::Public => Decision::Allow,
            Policy::PublicOnly => {
                if authenticated {
                    Decision::RedirectToApp
                } else {
                    Decision::Allow
                }
            }
            Policy::Protected(requirement) => {
                if requirement.require_auth && !authenticated {
                    return Decision::RedirectToLogin {
                        return_path: current_path.to_owned(),
                    };
                }
                if self.role_permitted(state, requirement) {
                    Decision::Allow
                } else {
                    Decision::RedirectToUnauthorized
                }
            }
        }
    }

    fn role_permitted(&self, state: &AuthState, requirement: &RouteRequirement) -> bool {
        if requirement.allowed_roles.is_empty() {
            return match self.empty_roles {
                // Optional-auth destinations stay open to anonymous visitors.
                EmptyRoles::AllowAny => true,
                EmptyRoles::DenyAll => false,
            };
        }
        // Missing role is a failed check.
        state
            .role()
            .map_or(false, |role| requirement.allowed_roles.contains(&role))
    }
}

/// [`Gate::decide`] with the permissive empty allow-list policy.
pub fn decide(state: &AuthState, policy: &Policy, current_path: &str) -> Decision {
    Gate::default().decide(state, policy, current_path)
}
